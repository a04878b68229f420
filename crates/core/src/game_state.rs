//! Game state module - owns the grid and drives a session
//!
//! `GameState` is the single owner of the grid. All mutation funnels through
//! [`GameState::resolve`] (slide/merge) and [`GameState::commit`] (spawn),
//! which the game loop calls on either side of the move animation.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::{Grid, Spawned};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, CELL_COUNT, GRID_SIZE, INITIAL_TILES};

/// What a single move did to the grid.
///
/// Produced by [`GameState::resolve`] and consumed by the animation driver
/// and by [`GameState::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub direction: Direction,
    /// Whether any cell differs between `before` and `after`.
    pub changed: bool,
    pub before: Grid,
    pub after: Grid,
    /// For each cell of `after`, the cell of `before` its tile slid from.
    pub origins: [Option<(usize, usize)>; CELL_COUNT],
    /// Score gained by merges.
    pub gained: u32,
}

impl MoveResult {
    /// Cells whose content differs between `before` and `after`, row-major.
    pub fn changed_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.before
            .cells()
            .iter()
            .zip(self.after.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
    }

    /// Source cell of the tile now at `(row, col)`.
    pub fn origin(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.origins
            .get(row * GRID_SIZE + col)
            .copied()
            .flatten()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: StdRng,
    score: u32,
    moves: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed, seeded with two tiles.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a new game seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        let mut state = Self::from_grid(Grid::EMPTY, rng);
        for _ in 0..INITIAL_TILES {
            state.grid.spawn_tile(&mut state.rng);
        }
        debug!("new game: {:?}", state.grid.rows());
        state
    }

    /// Resume from an arbitrary grid (no tiles are added).
    pub fn from_grid(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            rng,
            score: 0,
            moves: 0,
            game_over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Slide and merge. The grid is updated immediately; no tile is spawned.
    pub fn resolve(&mut self, direction: Direction) -> MoveResult {
        let before = self.grid;
        let shift = before.shift(direction);
        let changed = shift.grid != before;

        self.grid = shift.grid;
        if changed {
            self.score = self.score.saturating_add(shift.gained);
            self.moves += 1;
        }

        debug!(
            "move {}: changed={} gained={}",
            direction.as_str(),
            changed,
            shift.gained
        );

        MoveResult {
            direction,
            changed,
            before,
            after: shift.grid,
            origins: shift.origins,
            gained: shift.gained,
        }
    }

    /// Finish a move: spawn exactly one tile iff the move changed the grid.
    pub fn commit(&mut self, result: &MoveResult) -> Option<Spawned> {
        if !result.changed {
            return None;
        }
        let spawned = self.grid.spawn_tile(&mut self.rng);
        if let Some(s) = spawned {
            debug!("spawned {} at ({}, {})", s.value, s.row, s.col);
        }
        spawned
    }

    /// Resolve and commit in one call (no animation in between).
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let result = self.resolve(direction);
        self.commit(&result);
        result
    }

    /// Terminal-state check; latches `game_over` once no move is left.
    pub fn check_can_move(&mut self) -> bool {
        let can_move = self.grid.can_move();
        if !can_move {
            self.game_over = true;
        }
        can_move
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.rows();
        out.score = self.score;
        out.moves = self.moves;
        out.max_tile = self.grid.max_tile();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
