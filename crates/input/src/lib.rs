//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`] and drains the
//! terminal event queue without blocking, once per frame tick.

pub mod map;
pub mod source;

pub use tui_2048_types as types;

pub use map::{map_key, should_quit};
pub use source::{InputBatch, TerminalInput, MAX_EVENTS_PER_POLL};
