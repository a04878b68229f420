//! Animation module - tile position interpolation between moves
//!
//! Tiles are drawn at floating-point pixel positions held in
//! [`TilePositions`]. After a move, [`Animation`] walks every changed cell
//! from where its tile was toward the cell's own pixel origin over a fixed
//! number of steps. The animation is an iterator of frames; the caller draws
//! and paces once per frame. It always runs to completion, and the last
//! frame places every moving tile exactly on its target.
//!
//! A merged tile whose leftmost contributor did not change cells has no
//! distance to travel, so it snaps into place without intermediate motion.

use arrayvec::ArrayVec;

use crate::game_state::MoveResult;
use crate::types::{CELL_COUNT, GRID_SIZE, OUTLINE_PX, TILE_SIZE_PX};

/// Pixel position of a tile's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TilePosition {
    pub x: f32,
    pub y: f32,
}

impl TilePosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Resting pixel origin of cell `(row, col)`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::anim::{pixel_origin, TilePosition};
///
/// assert_eq!(pixel_origin(0, 0), TilePosition::new(10.0, 10.0));
/// assert_eq!(pixel_origin(1, 2), TilePosition::new(2.0 * 187.0 + 30.0, 187.0 + 20.0));
/// ```
pub fn pixel_origin(row: usize, col: usize) -> TilePosition {
    let tile = TILE_SIZE_PX as f32;
    let outline = OUTLINE_PX as f32;
    TilePosition {
        x: col as f32 * tile + (col as f32 + 1.0) * outline,
        y: row as f32 * tile + (row as f32 + 1.0) * outline,
    }
}

/// One visual position per grid cell, indexed like the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePositions {
    cells: [TilePosition; CELL_COUNT],
}

impl TilePositions {
    /// Every cell at rest on its own origin.
    pub fn new() -> Self {
        let mut cells = [TilePosition::default(); CELL_COUNT];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = pixel_origin(i / GRID_SIZE, i % GRID_SIZE);
        }
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> TilePosition {
        self.cells[row * GRID_SIZE + col]
    }

    pub fn set(&mut self, row: usize, col: usize, pos: TilePosition) {
        self.cells[row * GRID_SIZE + col] = pos;
    }

    /// True when every cell sits exactly on its origin.
    pub fn at_rest(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &p)| p == pixel_origin(i / GRID_SIZE, i % GRID_SIZE))
    }
}

impl Default for TilePositions {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-cell motion for one move.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    row: usize,
    col: usize,
    start: TilePosition,
    target: TilePosition,
    delta: TilePosition,
}

/// One frame of an animation, handed to the caller for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// 1-based step number.
    pub step: u32,
    pub total: u32,
    pub positions: TilePositions,
}

impl AnimationFrame {
    pub fn is_last(&self) -> bool {
        self.step == self.total
    }
}

/// Finite, non-restartable sequence of interpolation frames for one move.
#[derive(Debug, Clone)]
pub struct Animation {
    positions: TilePositions,
    tracks: ArrayVec<Track, CELL_COUNT>,
    step: u32,
    total: u32,
}

impl Animation {
    /// Plan the animation for `result`, starting from `positions`.
    ///
    /// Only cells whose content changed are animated. A changed cell starts at
    /// the origin of the cell its tile came from (or its current position if
    /// the tile did not travel) and ends on its own origin. `steps` is clamped
    /// to at least 1. When nothing has any distance to cover, the animation
    /// yields no frames and the changed cells are already settled.
    pub fn new(positions: TilePositions, result: &MoveResult, steps: u32) -> Self {
        let steps = steps.max(1);
        let mut positions = positions;
        let mut tracks = ArrayVec::new();

        for (row, col) in result.changed_cells() {
            let target = pixel_origin(row, col);
            let start = match result.origin(row, col) {
                Some((r, c)) if (r, c) != (row, col) => pixel_origin(r, c),
                _ => positions.get(row, col),
            };
            if start == target {
                positions.set(row, col, target);
                continue;
            }
            positions.set(row, col, start);
            tracks.push(Track {
                row,
                col,
                start,
                target,
                delta: TilePosition {
                    x: (target.x - start.x) / steps as f32,
                    y: (target.y - start.y) / steps as f32,
                },
            });
        }

        let total = if tracks.is_empty() { 0 } else { steps };
        Self {
            positions,
            tracks,
            step: 0,
            total,
        }
    }

    /// Number of frames this animation yields in total.
    pub fn total_steps(&self) -> u32 {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.total
    }

    /// Positions as of the most recent frame.
    pub fn positions(&self) -> &TilePositions {
        &self.positions
    }

    /// Run any remaining frames and return the settled positions.
    pub fn finish(mut self) -> TilePositions {
        while self.next().is_some() {}
        self.positions
    }
}

impl Iterator for Animation {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<AnimationFrame> {
        if self.step >= self.total {
            return None;
        }
        self.step += 1;
        let last = self.step == self.total;
        let k = self.step as f32;

        for t in &self.tracks {
            let pos = if last {
                t.target
            } else {
                TilePosition {
                    x: t.start.x + t.delta.x * k,
                    y: t.start.y + t.delta.y * k,
                }
            };
            self.positions.set(t.row, t.col, pos);
        }

        Some(AnimationFrame {
            step: self.step,
            total: self.total,
            positions: self.positions,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total.saturating_sub(self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Animation {}
impl std::iter::FusedIterator for Animation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::grid::Grid;
    use crate::types::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn resolve(rows: [[u32; 4]; 4], dir: Direction) -> MoveResult {
        let grid = Grid::from_rows(rows).unwrap();
        GameState::from_grid(grid, StdRng::seed_from_u64(3)).resolve(dir)
    }

    #[test]
    fn test_positions_start_at_rest() {
        assert!(TilePositions::new().at_rest());
    }

    #[test]
    fn test_slide_moves_from_source_to_target() {
        let r = resolve([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], Direction::Left);
        let mut anim = Animation::new(TilePositions::new(), &r, 4);
        assert_eq!(anim.total_steps(), 4);
        assert_eq!(anim.positions().get(0, 0), pixel_origin(0, 3));

        let first = anim.next().unwrap();
        let p = first.positions.get(0, 0);
        assert!(p.x < pixel_origin(0, 3).x && p.x > pixel_origin(0, 0).x);
        assert_eq!(p.y, pixel_origin(0, 0).y);

        let frames: Vec<_> = anim.by_ref().collect();
        assert_eq!(frames.len(), 3);
        assert!(frames.last().unwrap().is_last());
        assert_eq!(frames.last().unwrap().positions.get(0, 0), pixel_origin(0, 0));
        assert!(anim.next().is_none());
        assert!(anim.next().is_none());
    }

    #[test]
    fn test_converges_exactly_with_awkward_step_count() {
        let r = resolve([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], Direction::Down);
        let settled = Animation::new(TilePositions::new(), &r, 7).finish();
        assert!(settled.at_rest());
    }

    #[test]
    fn test_unchanged_move_has_no_frames() {
        let r = resolve([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], Direction::Left);
        let anim = Animation::new(TilePositions::new(), &r, 20);
        assert_eq!(anim.len(), 0);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_in_place_merge_snaps() {
        let r = resolve([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], Direction::Left);
        let anim = Animation::new(TilePositions::new(), &r, 20);
        assert_eq!(anim.total_steps(), 0);
        assert!(anim.positions().at_rest());
    }

    #[test]
    fn test_unchanged_cells_untouched() {
        let r = resolve([[4, 0, 0, 2], [8, 0, 0, 0], [0; 4], [0; 4]], Direction::Left);
        let mut start = TilePositions::new();
        let marker = TilePosition::new(-1.0, -1.0);
        start.set(1, 0, marker);
        let frames: Vec<_> = Animation::new(start, &r, 5).collect();
        assert_eq!(frames.len(), 5);
        for f in &frames {
            assert_eq!(f.positions.get(1, 0), marker);
            assert_eq!(f.positions.get(0, 0), pixel_origin(0, 0));
        }
        assert_eq!(frames[4].positions.get(0, 1), pixel_origin(0, 1));
    }

    #[test]
    fn test_zero_steps_clamped() {
        let r = resolve([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], Direction::Left);
        let anim = Animation::new(TilePositions::new(), &r, 0);
        assert_eq!(anim.total_steps(), 1);
    }
}
