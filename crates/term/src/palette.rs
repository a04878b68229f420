//! Tile colors.
//!
//! Values outside the table fall back to [`DEFAULT_TILE`], which matches the
//! empty-cell background.

use crate::fb::Rgb;

/// Gutter color between cells.
pub const OUTLINE: Rgb = Rgb::new(187, 173, 160);

/// Empty cell background.
pub const BACKGROUND: Rgb = Rgb::new(205, 192, 180);

/// Tile label color.
pub const FONT: Rgb = Rgb::new(119, 110, 101);

/// Color for tile values missing from the table.
pub const DEFAULT_TILE: Rgb = BACKGROUND;

const TILE_COLORS: [(u32, Rgb); 13] = [
    (2, Rgb::new(238, 228, 218)),
    (4, Rgb::new(237, 224, 200)),
    (8, Rgb::new(242, 177, 121)),
    (16, Rgb::new(245, 149, 99)),
    (32, Rgb::new(246, 124, 95)),
    (64, Rgb::new(246, 94, 59)),
    (128, Rgb::new(237, 207, 114)),
    (256, Rgb::new(237, 204, 97)),
    (512, Rgb::new(237, 200, 80)),
    (1024, Rgb::new(237, 197, 63)),
    (2048, Rgb::new(237, 194, 46)),
    (4096, Rgb::new(237, 190, 30)),
    (8192, Rgb::new(237, 187, 13)),
];

pub fn tile_color(value: u32) -> Rgb {
    TILE_COLORS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_TILE)
}
