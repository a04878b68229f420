//! The main loop.
//!
//! Strictly sequential, one frame at a time:
//!
//! 1. poll input (non-blocking)
//! 2. for each key press: resolve the move, run its animation to completion
//!    (draw + pace per step), then spawn if the grid changed
//! 3. check for game over
//! 4. draw and pace
//!
//! Once no move is left the GAME OVER frame stays up, redrawn every tick,
//! until the next key press.
//!
//! Collaborators sit behind small traits so the loop runs against the real
//! terminal in the binary and against fakes in tests.

use anyhow::Result;
use log::{debug, info};

use crate::core::{Animation, GameSnapshot, GameState, TilePositions};
use crate::input::InputBatch;
use crate::types::{Direction, InputEvent};

/// Non-blocking source of input events.
pub trait InputSource {
    /// Everything that arrived since the last poll; empty means no input.
    fn poll(&mut self) -> Result<InputBatch>;
}

/// Side-effecting frame sink.
pub trait Renderer {
    fn draw(&mut self, snap: &GameSnapshot, positions: &TilePositions) -> Result<()>;
}

/// Fixed-rate frame clock.
pub trait FramePacer {
    /// Block until the next tick boundary.
    fn tick(&mut self);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Result<InputBatch> {
        (**self).poll()
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn draw(&mut self, snap: &GameSnapshot, positions: &TilePositions) -> Result<()> {
        (**self).draw(snap, positions)
    }
}

impl<T: FramePacer + ?Sized> FramePacer for &mut T {
    fn tick(&mut self) {
        (**self).tick()
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    GameOver,
}

/// Final tally handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reason: EndReason,
    pub score: u32,
    pub moves: u32,
    pub max_tile: u32,
}

pub struct GameLoop<I, R, P> {
    state: GameState,
    positions: TilePositions,
    snap: GameSnapshot,
    input: I,
    renderer: R,
    pacer: P,
    animation_steps: u32,
}

impl<I, R, P> GameLoop<I, R, P>
where
    I: InputSource,
    R: Renderer,
    P: FramePacer,
{
    pub fn new(state: GameState, input: I, renderer: R, pacer: P, animation_steps: u32) -> Self {
        Self {
            state,
            positions: TilePositions::new(),
            snap: GameSnapshot::default(),
            input,
            renderer,
            pacer,
            animation_steps: animation_steps.max(1),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn positions(&self) -> &TilePositions {
        &self.positions
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run frames until the player quits or no move is left.
    pub fn run(&mut self) -> Result<Outcome> {
        info!("game started: {:?}", self.state.grid().rows());
        let reason = loop {
            if let Some(reason) = self.frame()? {
                break reason;
            }
        };
        if reason == EndReason::GameOver {
            self.hold_until_key()?;
        }

        let outcome = Outcome {
            reason,
            score: self.state.score(),
            moves: self.state.moves(),
            max_tile: self.state.max_tile(),
        };
        info!("game ended: {:?}", outcome);
        Ok(outcome)
    }

    /// One loop iteration. Returns `Some` when the loop should stop.
    pub fn frame(&mut self) -> Result<Option<EndReason>> {
        for event in self.input.poll()? {
            match event {
                InputEvent::Quit => return Ok(Some(EndReason::Quit)),
                InputEvent::KeyPress(direction) => self.play_move(direction)?,
            }
        }

        if !self.state.check_can_move() {
            self.redraw()?;
            return Ok(Some(EndReason::GameOver));
        }

        self.redraw()?;
        self.pacer.tick();
        Ok(None)
    }

    /// Resolve, animate to completion, then spawn.
    fn play_move(&mut self, direction: Direction) -> Result<()> {
        let result = self.state.resolve(direction);

        let mut animation = Animation::new(self.positions, &result, self.animation_steps);
        debug!(
            "animating {} for {} steps",
            direction.as_str(),
            animation.total_steps()
        );
        self.positions = *animation.positions();
        for frame in &mut animation {
            self.positions = frame.positions;
            self.redraw()?;
            self.pacer.tick();
        }
        debug_assert!(self.positions.at_rest());

        self.state.commit(&result);
        Ok(())
    }

    /// Keep the final frame on screen until any mapped key arrives.
    fn hold_until_key(&mut self) -> Result<()> {
        loop {
            self.pacer.tick();
            if !self.input.poll()?.is_empty() {
                return Ok(());
            }
            self.redraw()?;
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.state.snapshot_into(&mut self.snap);
        self.renderer.draw(&self.snap, &self.positions)
    }
}
