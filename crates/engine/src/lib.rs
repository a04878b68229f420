//! Game engine module - the frame loop and its wiring
//!
//! Ties the pure core (grid rules, animation) to the terminal crates:
//!
//! - [`config`]: startup knobs with environment overrides
//! - [`game_loop`]: the sequential input → move → animate → spawn → draw loop,
//!   generic over [`InputSource`], [`Renderer`] and [`FramePacer`]
//! - [`terminal`]: crossterm-backed implementations of those traits
//! - [`logging`]: file logger setup

pub mod config;
pub mod game_loop;
pub mod logging;
pub mod terminal;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::GameConfig;
pub use game_loop::{EndReason, FramePacer, GameLoop, InputSource, Outcome, Renderer};
pub use logging::setup_logging;
pub use terminal::TerminalScreen;
