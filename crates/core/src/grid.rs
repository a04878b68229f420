//! Grid module - the 4x4 playfield
//!
//! Each cell holds a tile value: 0 for empty, otherwise a power of two >= 2.
//! Uses a flat array in row-major order (row * GRID_SIZE + col), so the grid is
//! `Copy` and comparisons are cheap. Coordinates are `(row, col)` with row 0 at
//! the top and col 0 at the left.

use arrayvec::ArrayVec;
use rand::Rng;
use thiserror::Error;

use crate::merge::merge_sequence_traced;
use crate::types::{Direction, CELL_COUNT, GRID_SIZE, MAX_TILE, SPAWN_FOUR_PERCENT};

/// Rejected grid contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) holds {value}, which is not 0 or a power of two >= 2")]
    NotPowerOfTwo { row: usize, col: usize, value: u32 },
    #[error("cell ({row}, {col}) holds {value}, above the largest tile {max}", max = MAX_TILE)]
    TileTooLarge { row: usize, col: usize, value: u32 },
}

/// Returns true for values a cell may hold: 0, or a power of two in
/// `2..=MAX_TILE`.
#[inline]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// A tile placed by [`Grid::spawn_tile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Outcome of sliding the grid, before any spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub grid: Grid,
    /// For each destination cell, the cell its tile came from.
    pub origins: [Option<(usize, usize)>; CELL_COUNT],
    pub gained: u32,
}

/// The 4x4 game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [u32; CELL_COUNT],
}

impl Grid {
    /// An empty grid.
    pub const EMPTY: Grid = Grid {
        cells: [0; CELL_COUNT],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a grid from rows, validating every value.
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::EMPTY;
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value > MAX_TILE {
                    return Err(GridError::TileTooLarge { row, col, value });
                }
                if !is_valid_tile(value) {
                    return Err(GridError::NotPowerOfTwo { row, col, value });
                }
                grid.cells[Self::index(row, col)] = value;
            }
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        row * GRID_SIZE + col
    }

    /// Value at `(row, col)`; `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(self.cells[Self::index(row, col)])
    }

    pub fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, values) in out.iter_mut().enumerate() {
            values.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        }
        out
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (i, &v) in self.cells.iter().enumerate() {
            if v == 0 {
                out.push((i / GRID_SIZE, i % GRID_SIZE));
            }
        }
        out
    }

    /// Grid with every row reversed.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::EMPTY;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[Self::index(row, GRID_SIZE - 1 - col)] = self.cells[Self::index(row, col)];
            }
        }
        out
    }

    /// Grid with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        let mut out = Self::EMPTY;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[Self::index(col, row)] = self.cells[Self::index(row, col)];
            }
        }
        out
    }

    /// Slide and merge every line toward `direction`. No randomness.
    pub fn shift(&self, direction: Direction) -> Shift {
        let mut out = Shift {
            grid: Self::EMPTY,
            origins: [None; CELL_COUNT],
            gained: 0,
        };

        for line in 0..GRID_SIZE {
            let mut values = [0; GRID_SIZE];
            for (k, v) in values.iter_mut().enumerate() {
                let (row, col) = direction.cell(line, k);
                *v = self.cells[Self::index(row, col)];
            }

            let trace = merge_sequence_traced(values);
            out.gained += trace.gained;

            for k in 0..GRID_SIZE {
                let (row, col) = direction.cell(line, k);
                let i = Self::index(row, col);
                out.grid.cells[i] = trace.line[k];
                out.origins[i] = trace.sources[k].map(|src| direction.cell(line, src));
            }
        }

        out.grid.debug_check();
        out
    }

    /// Slide the grid in place; returns whether any cell changed.
    ///
    /// The comparison is position-for-position, so a move that only
    /// reorders values still counts as a change.
    pub fn resolve_move(&mut self, direction: Direction) -> bool {
        let shifted = self.shift(direction).grid;
        let changed = shifted != *self;
        *self = shifted;
        changed
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Does nothing and returns `None` when the grid is full; callers check
    /// [`Grid::has_empty_cell`] or [`Grid::can_move`] first.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Spawned> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[rng.random_range(0..empty.len())];
        let value = if rng.random_ratio(SPAWN_FOUR_PERCENT, 100) {
            4
        } else {
            2
        };
        self.cells[Self::index(row, col)] = value;
        self.debug_check();
        Some(Spawned { row, col, value })
    }

    /// True while at least one move can still change the grid.
    ///
    /// Equal neighbors at `MAX_TILE` do not count, matching the merge rule.
    pub fn can_move(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let v = self.cells[Self::index(row, col)];
                if v == 0 {
                    return true;
                }
                if v == MAX_TILE {
                    continue;
                }
                if col + 1 < GRID_SIZE && v == self.cells[Self::index(row, col + 1)] {
                    return true;
                }
                if row + 1 < GRID_SIZE && v == self.cells[Self::index(row + 1, col)] {
                    return true;
                }
            }
        }
        false
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.cells.iter().all(|&v| is_valid_tile(v)),
            "grid holds a value that is not 0 or a power of two up to MAX_TILE: {:?}",
            self.cells
        );
    }
}
