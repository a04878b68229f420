//! Startup configuration.
//!
//! Defaults come from the constants in `tui_2048_types`. A few knobs can be
//! overridden through environment variables, read once at startup:
//!
//! - `TUI2048_FPS`: target frame rate (default 60)
//! - `TUI2048_STEPS`: animation steps per move (default 20, minimum 1)
//! - `TUI2048_SEED`: RNG seed; unset means a random game
//! - `TUI2048_LOG_DIR`: enables file logging into this directory
//!
//! Values that do not parse fall back to the default.

use std::path::PathBuf;

use crate::types::{FPS, MOVEMENT_SPEED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub fps: u32,
    pub animation_steps: u32,
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            animation_steps: MOVEMENT_SPEED,
            seed: None,
            log_dir: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (used by `from_env` and by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fps = lookup("TUI2048_FPS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&v: &u32| v > 0)
            .unwrap_or(defaults.fps);

        let animation_steps = lookup("TUI2048_STEPS")
            .and_then(|s| s.trim().parse().ok())
            .map(|v: u32| v.max(1))
            .unwrap_or(defaults.animation_steps);

        let seed = lookup("TUI2048_SEED").and_then(|s| s.trim().parse().ok());

        let log_dir = lookup("TUI2048_LOG_DIR")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            fps,
            animation_steps,
            seed,
            log_dir,
        }
    }
}
