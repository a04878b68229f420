//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to a terminal backend.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: tile value to color table
//! - [`grid_view`]: pure mapping from game snapshot and tile positions to a framebuffer
//! - [`renderer`]: raw-mode terminal output with diffed redraws
//! - [`pacer`]: fixed-rate frame clock

pub mod fb;
pub mod grid_view;
pub mod pacer;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{AnchorY, BoardRect, GridView, Viewport};
pub use pacer::FixedRatePacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
