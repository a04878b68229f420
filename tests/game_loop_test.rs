//! Integration tests for the main game loop with scripted collaborators.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_2048::core::{is_valid_tile, GameSnapshot, GameState, Grid, TilePositions};
use tui_2048::engine::{EndReason, FramePacer, GameLoop, InputSource, Renderer};
use tui_2048::input::InputBatch;
use tui_2048::types::{Direction, InputEvent};

/// Presses a random direction every frame, quitting after `budget` frames.
struct RandomPlayer {
    rng: StdRng,
    budget: u32,
}

impl InputSource for RandomPlayer {
    fn poll(&mut self) -> Result<InputBatch> {
        let mut batch = InputBatch::new();
        if self.budget == 0 {
            batch.push(InputEvent::Quit);
        } else {
            self.budget -= 1;
            let dir = Direction::ALL[self.rng.random_range(0..4)];
            batch.push(InputEvent::KeyPress(dir));
        }
        Ok(batch)
    }
}

#[derive(Default)]
struct Checker {
    frames: u32,
    last_score: u32,
    saw_motion: bool,
}

impl Renderer for Checker {
    fn draw(&mut self, snap: &GameSnapshot, positions: &TilePositions) -> Result<()> {
        self.frames += 1;
        assert!(snap.grid.iter().flatten().all(|&v| is_valid_tile(v)));
        assert!(snap.score >= self.last_score, "score went down");
        self.last_score = snap.score;
        if !positions.at_rest() {
            self.saw_motion = true;
        }
        Ok(())
    }
}

#[derive(Default)]
struct NoWait(u32);

impl FramePacer for NoWait {
    fn tick(&mut self) {
        self.0 += 1;
    }
}

#[test]
fn random_game_runs_to_an_end() {
    let player = RandomPlayer {
        rng: StdRng::seed_from_u64(2048),
        budget: 5000,
    };
    let mut lp = GameLoop::new(GameState::new(2048), player, Checker::default(), NoWait::default(), 3);
    let out = lp.run().unwrap();

    assert!(matches!(out.reason, EndReason::Quit | EndReason::GameOver));
    assert_eq!(out.score, lp.state().score());
    assert!(out.max_tile >= 4);
    assert!(lp.renderer().saw_motion);
    assert!(lp.positions().at_rest());
    if out.reason == EndReason::GameOver {
        assert!(!lp.state().grid().can_move());
    }
}

#[test]
fn borrowed_collaborators_work() {
    let mut player = RandomPlayer {
        rng: StdRng::seed_from_u64(1),
        budget: 10,
    };
    let mut checker = Checker::default();
    let mut pacer = NoWait::default();
    {
        let mut lp = GameLoop::new(GameState::new(1), &mut player, &mut checker, &mut pacer, 2);
        lp.run().unwrap();
    }
    assert_eq!(player.budget, 0);
    assert!(checker.frames > 0);
    assert_eq!(pacer.0, checker.frames);
}

#[test]
fn full_board_ends_on_first_frame() {
    let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    let state = GameState::from_grid(grid, StdRng::seed_from_u64(0));
    let player = RandomPlayer {
        rng: StdRng::seed_from_u64(0),
        budget: 100,
    };
    let mut lp = GameLoop::new(state, player, Checker::default(), NoWait::default(), 5);
    let out = lp.run().unwrap();
    assert_eq!(out.reason, EndReason::GameOver);
    assert_eq!(out.moves, 0);
    // The overlay frame is drawn once, then held for one tick until the
    // player's next key press.
    assert_eq!(lp.renderer().frames, 1);
    assert_eq!(lp.pacer().0, 1);
}
