//! Non-blocking terminal event drain.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key;
use crate::types::InputEvent;

/// Upper bound on events returned by a single poll.
///
/// Anything beyond this stays queued in the terminal for the next tick.
pub const MAX_EVENTS_PER_POLL: usize = 16;

/// Events gathered during one frame tick.
pub type InputBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_POLL>;

/// Reads crossterm events without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput {
    _private: (),
}

impl TerminalInput {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Drain every pending event. Returns an empty batch when nothing is queued.
    ///
    /// Key repeats and releases are ignored so one physical press is one move.
    pub fn drain(&mut self) -> Result<InputBatch> {
        let mut out = InputBatch::new();
        while !out.is_full() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(ev) = map_key(key) {
                    out.push(ev);
                }
            }
        }
        Ok(out)
    }
}
