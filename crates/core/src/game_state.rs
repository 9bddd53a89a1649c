//! Game state module - the 2048 board and its rules
//!
//! The board is a `width x height` grid stored row-major in a flat `Vec<u32>`.
//! `0` is an empty cell; any other value is a tile.
//!
//! A move is a series of sweeps toward one edge. Each sweep walks adjacent
//! cell pairs `(current, toward)` line by line, starting at the edge opposite
//! the target and stepping toward it:
//!
//! 1. an empty `toward` cell takes `current`'s tile;
//! 2. equal cells merge into `toward`, doubling it;
//! 3. on the first sweep only, an empty `current` cell on the trailing line
//!    (the line furthest from the target edge) receives a new tile.
//!
//! Sweeps repeat until one leaves the board unchanged, so merged tiles can
//! merge again within the same move.

use std::fmt;

use crate::error::BoardError;
use crate::game::TileGame;
use crate::types::{
    Direction, BOARD_HEIGHT, BOARD_WIDTH, CELL_TEXT_WIDTH, EMPTY_CELL_TEXT, SPAWN_TILE,
};

/// The 2048 board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Row-major cells (row * width + col)
    cells: Vec<u32>,
    width: u32,
    height: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the standard 4x4 starting board.
    ///
    /// Every third cell (by flat index) starts with a `2`.
    pub fn new() -> Self {
        let cells = (0..BOARD_WIDTH * BOARD_HEIGHT)
            .map(|i| if i % 3 == 0 { SPAWN_TILE } else { 0 })
            .collect();
        Self {
            cells,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }

    /// Build a board from explicit row-major cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u32>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(BoardError::CellCount {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Get the tile at (col, row), `None` if out of bounds.
    pub fn get(&self, col: u32, row: u32) -> Option<u32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[self.index(row as usize, col as usize)])
    }

    /// Sum of all tiles on the board.
    pub fn score(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board (0 when empty).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * (self.width as usize) + col
    }

    /// Run sweeps toward `direction` until the board settles.
    fn slide(&mut self, direction: Direction, first: bool) {
        let mut first = first;
        loop {
            let next = self.sweep(direction, first);
            if next == self.cells {
                return;
            }
            self.cells = next;
            first = false;
        }
    }

    /// One sweep toward `direction`, returning the resulting cells.
    fn sweep(&self, direction: Direction, first: bool) -> Vec<u32> {
        let mut next = self.cells.clone();

        // `lines` counts the lines perpendicular to the movement axis,
        // `across` the cells within each of those lines.
        let (lines, across) = match direction {
            Direction::Up | Direction::Down => (self.height as usize, self.width as usize),
            Direction::Left | Direction::Right => (self.width as usize, self.height as usize),
        };

        for step in 0..lines - 1 {
            let (line, toward_line, trailing) = match direction {
                Direction::Up | Direction::Left => {
                    let line = lines - 1 - step;
                    (line, line - 1, step == 0)
                }
                Direction::Down | Direction::Right => (step, step + 1, step == 0),
            };

            for k in 0..across {
                let (cur, toward) = match direction {
                    Direction::Up | Direction::Down => {
                        (self.index(line, k), self.index(toward_line, k))
                    }
                    Direction::Left | Direction::Right => {
                        (self.index(k, line), self.index(k, toward_line))
                    }
                };

                if next[toward] == 0 {
                    next[toward] = next[cur];
                    next[cur] = 0;
                }
                if next[cur] == next[toward] {
                    next[toward] = next[toward].saturating_mul(2);
                    next[cur] = 0;
                }
                if first && trailing && next[cur] == 0 {
                    next[cur] = SPAWN_TILE;
                }
            }
        }

        next
    }

    fn has_equal_neighbours(&self) -> bool {
        let (w, h) = (self.width as usize, self.height as usize);
        for row in 0..h {
            for col in 0..w {
                let v = self.cells[self.index(row, col)];
                if col + 1 < w && self.cells[self.index(row, col + 1)] == v {
                    return true;
                }
                if row + 1 < h && self.cells[self.index(row + 1, col)] == v {
                    return true;
                }
            }
        }
        false
    }
}

impl TileGame for GameState {
    fn left(&mut self, first: bool) {
        self.slide(Direction::Left, first);
    }

    fn right(&mut self, first: bool) {
        self.slide(Direction::Right, first);
    }

    fn up(&mut self, first: bool) {
        self.slide(Direction::Up, first);
    }

    fn down(&mut self, first: bool) {
        self.slide(Direction::Down, first);
    }

    fn check_game_over(&mut self) -> bool {
        self.count_empty() == 0 && !self.has_equal_neighbours()
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                if cell == 0 {
                    write!(f, "{:>width$}", EMPTY_CELL_TEXT, width = CELL_TEXT_WIDTH)?;
                } else {
                    write!(f, "{:>width$}", cell, width = CELL_TEXT_WIDTH)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
