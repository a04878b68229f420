//! Terminal 2048 runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Arrow keys, WASD or HJKL slide the tiles; q, Esc or Ctrl+C quits.

use anyhow::Result;
use log::info;

use tui_2048::core::GameState;
use tui_2048::engine::{EndReason, GameConfig, GameLoop, Outcome, TerminalScreen};
use tui_2048::input::TerminalInput;
use tui_2048::term::FixedRatePacer;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let _logger = match &config.log_dir {
        Some(dir) => Some(tui_2048::engine::setup_logging(dir)?),
        None => None,
    };
    info!("config: {:?}", config);

    let mut screen = TerminalScreen::new();
    let result = screen.enter().and_then(|()| run(&config, &mut screen));

    // Always try to restore terminal state.
    let _ = screen.exit();

    let outcome = result?;
    let ending = match outcome.reason {
        EndReason::Quit => "quit",
        EndReason::GameOver => "game over",
    };
    println!(
        "{}: score {}, {} moves, best tile {}",
        ending, outcome.score, outcome.moves, outcome.max_tile
    );
    Ok(())
}

fn run(config: &GameConfig, screen: &mut TerminalScreen) -> Result<Outcome> {
    let state = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };

    let mut game = GameLoop::new(
        state,
        TerminalInput::new(),
        screen,
        FixedRatePacer::new(config.fps),
        config.animation_steps,
    );
    game.run()
}
