use tui_2048::core::{pixel_origin, GameSnapshot, TilePosition, TilePositions};
use tui_2048::term::palette;
use tui_2048::term::{AnchorY, GridView, Viewport};

fn snap_with(row: usize, col: usize, value: u32) -> GameSnapshot {
    let mut snap = GameSnapshot::default();
    snap.grid[row][col] = value;
    snap
}

fn all_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_board_fits_exact_viewport() {
    let view = GridView::default();
    let board = view.board_rect(Viewport::new(37, 17));
    assert_eq!((board.x, board.y), (0, 0));

    let fb = view.render(&GameSnapshot::default(), &TilePositions::new(), Viewport::new(37, 17));
    // Corner is gutter, (1,1) is the first cell background.
    assert_eq!(fb.get(0, 0).unwrap().style.bg, palette::OUTLINE);
    assert_eq!(fb.get(1, 1).unwrap().style.bg, palette::BACKGROUND);
}

#[test]
fn term_view_draws_tile_with_label_and_color() {
    let view = GridView::default();
    let snap = snap_with(0, 0, 128);
    let fb = view.render(&snap, &TilePositions::new(), Viewport::new(37, 17));

    // Tile 8x3 at (1,1); label on the middle row.
    let cell = fb.get(1, 1).unwrap();
    assert_eq!(cell.style.bg, palette::tile_color(128));
    assert!(fb.row_text(2).contains("128"));
}

#[test]
fn term_view_draws_moving_tile_between_cells() {
    let view = GridView::default();
    let snap = snap_with(0, 0, 2);
    let mut positions = TilePositions::new();
    let a = pixel_origin(0, 0);
    let b = pixel_origin(0, 1);
    positions.set(0, 0, TilePosition::new((a.x + b.x) / 2.0, a.y));

    let fb = view.render(&snap, &positions, Viewport::new(37, 17));
    // Halfway across one pitch of 9 columns: shifted right by 4 or 5.
    let x = (1..37).find(|&x| fb.get(x, 1).unwrap().style.bg == palette::tile_color(2));
    assert!(matches!(x, Some(5) | Some(6)), "tile starts at {:?}", x);
}

#[test]
fn term_view_side_panel_when_wide_enough() {
    let view = GridView::default();
    let mut snap = snap_with(1, 1, 4);
    snap.score = 1234;
    snap.moves = 7;
    snap.max_tile = 4;

    let fb = view.render(&snap, &TilePositions::new(), Viewport::new(60, 17));
    let text = all_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("MOVES"));
    // Hints cover every key set the input map accepts.
    assert!(text.contains("arrows"));
    assert!(text.contains("wasd"));
    assert!(text.contains("hjkl"));
    assert!(text.contains("quit"));

    let narrow = view.render(&snap, &TilePositions::new(), Viewport::new(37, 17));
    assert!(!all_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_game_over_overlay() {
    let view = GridView::default().with_anchor_y(AnchorY::Top);
    let mut snap = GameSnapshot::default();
    snap.game_over = true;
    let fb = view.render(&snap, &TilePositions::new(), Viewport::new(40, 30));
    assert!(all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let view = GridView::default();
    let board = view.board_rect(Viewport::new(37, 27));
    assert_eq!(board.y, 5);
    assert_eq!(view.with_anchor_y(AnchorY::Top).board_rect(Viewport::new(37, 27)).y, 0);
}
