use crate::types::GRID_SIZE;

/// Plain copy of everything the view needs to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub moves: u32,
    pub max_tile: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.grid[row][col]
    }
}
