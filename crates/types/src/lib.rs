//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Geometry
//!
//! The playfield is a fixed 4x4 grid. Tile positions are expressed in a
//! virtual pixel space (an 800x800 window) so animation math is independent of
//! the terminal size; the terminal view scales pixels down to character cells.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per row and per column |
//! | `WINDOW_PX` | 800 | Virtual window edge length |
//! | `OUTLINE_PX` | 10 | Gap between tiles (and around the edge) |
//! | `TILE_SIZE_PX` | 187 | Tile edge length |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Target frame rate |
//! | `MOVEMENT_SPEED` | 20 | Animation steps per move |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GRID_SIZE, TILE_SIZE_PX};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(TILE_SIZE_PX, 187);
//! ```

/// Cells per row and per column.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Edge length of the virtual window in pixels.
pub const WINDOW_PX: u32 = 800;

/// Outline thickness in pixels (gap between adjacent tiles).
pub const OUTLINE_PX: u32 = 10;

/// Tile edge length in pixels.
pub const TILE_SIZE_PX: u32 = (WINDOW_PX - (GRID_SIZE as u32 + 1) * OUTLINE_PX) / GRID_SIZE as u32;

/// Target frame rate.
pub const FPS: u32 = 60;

/// Number of discrete animation steps per move.
pub const MOVEMENT_SPEED: u32 = 20;

/// Chance (in percent) that a spawned tile is a 4 instead of a 2.
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Largest tile a cell may hold: 2^17, the highest value reachable on a
/// 4x4 grid. Two tiles at this value do not merge, so no merge or score
/// can overflow `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// Number of tiles placed on an empty grid when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Frame interval in milliseconds for a given frame rate (never zero).
pub const fn frame_ms(fps: u32) -> u32 {
    if fps == 0 || fps > 1000 {
        1
    } else {
        1000 / fps
    }
}


/// The four directions a move can slide tiles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Map a position along a line of the move to its grid `(row, col)`.
    ///
    /// `line` selects the row (horizontal moves) or column (vertical moves),
    /// and `k` counts cells starting from the edge tiles slide toward. This is
    /// the view transform that lets every direction share one merge routine:
    ///
    /// - `Left`: identity
    /// - `Right`: row reversal
    /// - `Up`: transpose
    /// - `Down`: transpose, then reversal
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.cell(1, 0), (1, 0));
    /// assert_eq!(Direction::Right.cell(1, 0), (1, 3));
    /// assert_eq!(Direction::Up.cell(1, 0), (0, 1));
    /// assert_eq!(Direction::Down.cell(1, 0), (3, 1));
    /// ```
    #[inline]
    pub fn cell(&self, line: usize, k: usize) -> (usize, usize) {
        let last = GRID_SIZE - 1;
        match self {
            Direction::Left => (line, k),
            Direction::Right => (line, last - k),
            Direction::Up => (k, line),
            Direction::Down => (last - k, line),
        }
    }
}

/// Discrete input events delivered to the game loop.
///
/// The input source only ever produces these two shapes, so malformed
/// directions cannot reach the grid engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / quit key.
    Quit,
    /// A directional key press.
    KeyPress(Direction),
}
