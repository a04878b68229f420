//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules, the game state, and the tile
//! animation model. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Grids, traces and animations live on the stack
//!
//! # Module Structure
//!
//! - [`merge`]: the one slide/merge rule for a single line
//! - [`grid`]: 4x4 grid with move resolution, spawning and the game-over check
//! - [`game_state`]: the owned session state (grid, RNG, score, move count)
//! - [`anim`]: pixel positions and the step-by-step move animation
//! - [`snapshot`]: plain data copied out for rendering
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; two equal neighbors merge into
//!   their sum, and each tile merges at most once per move
//! - A move that changes the grid spawns one tile: a 2 (90%) or a 4 (10%)
//! - The game ends when the grid is full and no two neighbors are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! let result = game.apply_move(Direction::Left);
//! if result.changed {
//!     assert!(game.grid().tile_count() >= 2);
//! }
//! assert!(game.check_can_move());
//! ```

pub mod anim;
pub mod game_state;
pub mod grid;
pub mod merge;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use anim::{pixel_origin, Animation, AnimationFrame, TilePosition, TilePositions};
pub use game_state::{GameState, MoveResult};
pub use grid::{is_valid_tile, Grid, GridError, Shift, Spawned};
pub use merge::{merge_sequence, merge_sequence_traced, Line, MergeTrace};
pub use snapshot::GameSnapshot;
