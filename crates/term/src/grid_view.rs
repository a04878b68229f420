//! GridView: maps a game snapshot and tile positions into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Tile positions arrive in virtual pixels (see `tui_2048_types::WINDOW_PX`);
//! the view scales them so one cell pitch in pixels maps to one cell pitch in
//! characters. Resting tiles land exactly on their cell backgrounds, moving
//! tiles are rounded to the nearest character.

use crate::core::anim::TilePositions;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette;
use crate::types::{GRID_SIZE, OUTLINE_PX, TILE_SIZE_PX};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board origin and size in characters for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

const PITCH_PX: f32 = (TILE_SIZE_PX + OUTLINE_PX) as f32;

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the 2048 grid.
pub struct GridView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Gutter width in columns.
    gap_x: u16,
    /// Gutter height in rows.
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GridView {
    fn default() -> Self {
        // 8x3 tiles look roughly square with typical terminal glyphs.
        Self {
            cell_w: 8,
            cell_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GridView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn pitch_x(&self) -> u16 {
        self.cell_w + self.gap_x
    }

    fn pitch_y(&self) -> u16 {
        self.cell_h + self.gap_y
    }

    /// Board placement inside `viewport`.
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = GRID_SIZE as u16 * self.pitch_x() + self.gap_x;
        let h = GRID_SIZE as u16 * self.pitch_y() + self.gap_y;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect {
            x: x as i32,
            y: y as i32,
            w,
            h,
        }
    }

    /// Terminal cell for a tile's pixel position.
    pub fn to_screen(&self, board: BoardRect, x_px: f32, y_px: f32) -> (i32, i32) {
        let outline = OUTLINE_PX as f32;
        let cx = ((x_px - outline) / PITCH_PX * self.pitch_x() as f32).round() as i32;
        let cy = ((y_px - outline) / PITCH_PX * self.pitch_y() as f32).round() as i32;
        (
            board.x + self.gap_x as i32 + cx,
            board.y + self.gap_y as i32 + cy,
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        positions: &TilePositions,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board = self.board_rect(viewport);
        let outline = CellStyle::new(palette::FONT, palette::OUTLINE);
        fb.fill_rect(board.x, board.y, board.w, board.h, ' ', outline);

        // Cell backgrounds stay put; only tiles move.
        let empty = CellStyle::new(palette::FONT, palette::BACKGROUND);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let x = board.x + (self.gap_x + col as u16 * self.pitch_x()) as i32;
                let y = board.y + (self.gap_y + row as u16 * self.pitch_y()) as i32;
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', empty);
            }
        }

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snap.value(row, col);
                if value == 0 {
                    continue;
                }
                let pos = positions.get(row, col);
                let (x, y) = self.to_screen(board, pos.x, pos.y);
                self.draw_tile(fb, x, y, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, board);

        if snap.game_over {
            self.draw_overlay_text(fb, board, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        positions: &TilePositions,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, positions, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: i32, y: i32, value: u32) {
        let bg = palette::tile_color(value);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', CellStyle::new(palette::FONT, bg));

        let mut digits = [0u8; 10];
        let label = format_value(value, &mut digits);
        let label_style = CellStyle::new(palette::FONT, bg).bold();
        fb.put_centered(x, y + (self.cell_h / 2) as i32, self.cell_w, label, label_style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        board: BoardRect,
    ) {
        let panel_x = board.x + board.w as i32 + 2;
        if panel_x + 12 > viewport.width as i32 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut digits = [0u8; 10];
        let mut y = board.y;
        for (title, v) in [
            ("SCORE", snap.score),
            ("MOVES", snap.moves),
            ("BEST", snap.max_tile),
        ] {
            fb.put_str(panel_x, y, title, label);
            fb.put_str(panel_x, y + 1, format_value(v, &mut digits), value);
            y += 3;
        }

        let hint = CellStyle::new(Rgb::new(140, 140, 140), PANEL_BG);
        for (i, line) in ["move: arrows", "wasd or hjkl", "q/esc: quit"].iter().enumerate() {
            fb.put_str(panel_x, y + i as i32, line, hint);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, board: BoardRect, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = board.y + board.h as i32 / 2;
        fb.put_centered(board.x, mid_y, board.w, text, style);
    }
}

/// Decimal digits of `value` without allocating.
fn format_value(mut value: u32, buf: &mut [u8; 10]) -> &str {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    std::str::from_utf8(&buf[i..]).unwrap_or("?")
}
