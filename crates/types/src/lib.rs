//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, session glue, terminal rendering).
//!
//! # Board Dimensions
//!
//! The classic 2048 grid is 4x4 (`BOARD_WIDTH` x `BOARD_HEIGHT`). Cells are
//! stored row-major, `0` meaning empty.
//!
//! # Key Codes
//!
//! Arrow keys use the classic DOM `keyCode` values:
//!
//! | Code | Direction |
//! |------|-----------|
//! | 37 | Left |
//! | 38 | Up |
//! | 39 | Right |
//! | 40 | Down |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, BOARD_WIDTH, KEY_LEFT};
//!
//! assert_eq!(Direction::from_key_code(KEY_LEFT), Some(Direction::Left));
//! assert_eq!(Direction::from_key_code(13), None);
//! assert_eq!(BOARD_WIDTH, 4);
//! ```

/// Board width in cells (4 columns)
pub const BOARD_WIDTH: u32 = 4;

/// Board height in cells (4 rows)
pub const BOARD_HEIGHT: u32 = 4;

/// Value of a freshly spawned tile.
pub const SPAWN_TILE: u32 = 2;

/// Column width of one rendered cell.
pub const CELL_TEXT_WIDTH: usize = 8;

/// Text shown for an empty cell.
pub const EMPTY_CELL_TEXT: &str = "[]";

/// Arrow-left key code.
pub const KEY_LEFT: u32 = 37;

/// Arrow-up key code.
pub const KEY_UP: u32 = 38;

/// Arrow-right key code.
pub const KEY_RIGHT: u32 = 39;

/// Arrow-down key code.
pub const KEY_DOWN: u32 = 40;

/// Prefix written in front of the board once the game is over.
pub const GAME_OVER_BANNER: &str = "\t\tGAME OVER\n";

/// Controls hint appended to the move counter line.
pub const CONTROLS_HINT: &str = "Press ↑ ← ↓ → to play";

/// Build the status line shown above the board.
///
/// ```
/// use tui_2048_types::status_line;
///
/// assert_eq!(status_line(3), "moves: 3\t\t\t\tPress ↑ ← ↓ → to play");
/// ```
pub fn status_line(moves: u64) -> String {
    format!("moves: {moves}\t\t\t\t{CONTROLS_HINT}")
}

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All four directions, in key-code order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Map an arrow key code to a direction.
    ///
    /// Anything other than 37..=40 yields `None`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_LEFT => Some(Direction::Left),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}
