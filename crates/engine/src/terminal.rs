//! Terminal implementations of the loop's collaborator traits.

use anyhow::Result;

use crate::core::{GameSnapshot, TilePositions};
use crate::game_loop::{FramePacer, InputSource, Renderer};
use crate::input::{InputBatch, TerminalInput};
use crate::term::{FixedRatePacer, FrameBuffer, GridView, TerminalRenderer};

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputBatch> {
        self.drain()
    }
}

impl FramePacer for FixedRatePacer {
    fn tick(&mut self) {
        FixedRatePacer::tick(self);
    }
}

/// Grid view plus terminal output, reusing one framebuffer.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GridView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GridView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalScreen {
    fn draw(&mut self, snap: &GameSnapshot, positions: &TilePositions) -> Result<()> {
        let viewport = self.renderer.viewport();
        self.view.render_into(snap, positions, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
