//! The game-state seam.
//!
//! [`Session`](crate::session::Session) only talks to the board through this
//! trait, so it can be driven by the real engine or by a test double.

use crate::types::Direction;

/// A 2048 game-state object.
pub trait TileGame {
    /// Slide and merge tiles toward the left edge.
    ///
    /// `first` marks the initial call of a move; implementations may use it to
    /// decide whether a new tile is spawned.
    fn left(&mut self, first: bool);
    fn right(&mut self, first: bool);
    fn up(&mut self, first: bool);
    fn down(&mut self, first: bool);

    /// True when no further move can change the board.
    fn check_game_over(&mut self) -> bool;

    /// Text rendering of the current board.
    fn render(&self) -> String;

    /// Dispatch a direction to the matching mutator.
    fn shift(&mut self, direction: Direction, first: bool) {
        match direction {
            Direction::Left => self.left(first),
            Direction::Up => self.up(first),
            Direction::Right => self.right(first),
            Direction::Down => self.down(first),
        }
    }
}
