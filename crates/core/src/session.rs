//! Session - glue between key input, the game state and the two text panes.
//!
//! A session owns the move counter and the last rendered text of both panes.
//! Text is only rewritten when a recognized direction is handled, so an
//! ignored key leaves the screen untouched.

use log::{debug, info};

use crate::game::TileGame;
use crate::game_state::GameState;
use crate::types::{status_line, Direction, GAME_OVER_BANNER};

/// Result of feeding one key to a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not an arrow key; nothing happened.
    Ignored,
    /// The move was dispatched and counted.
    Moved,
    /// The move was dispatched but the game is over; the counter did not change.
    GameOver,
}

impl KeyOutcome {
    /// Whether the panes were rewritten.
    pub fn redrawn(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// A single play-through driven by key events.
#[derive(Debug)]
pub struct Session<G: TileGame> {
    game: G,
    moves: u64,
    game_over: bool,
    status_text: String,
    board_text: String,
}

impl<G: TileGame> Session<G> {
    pub fn new(game: G) -> Self {
        let board_text = game.render();
        info!("session started");
        Self {
            game,
            moves: 0,
            game_over: false,
            status_text: status_line(0),
            board_text,
        }
    }

    /// Number of moves accepted while the game was still running.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Game-over flag as of the last handled key.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Move counter and controls hint.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Board rendering, prefixed with the game-over banner once the game ends.
    pub fn board_text(&self) -> &str {
        &self.board_text
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Handle a raw arrow key code (37..=40); anything else is ignored.
    pub fn handle_key_code(&mut self, code: u32) -> KeyOutcome {
        self.handle(Direction::from_key_code(code))
    }

    /// Handle an already-mapped key.
    pub fn handle(&mut self, direction: Option<Direction>) -> KeyOutcome {
        match direction {
            Some(direction) => self.handle_direction(direction),
            None => KeyOutcome::Ignored,
        }
    }

    /// Dispatch one move and refresh both panes.
    pub fn handle_direction(&mut self, direction: Direction) -> KeyOutcome {
        self.game.shift(direction, true);

        let outcome = if self.game.check_game_over() {
            if !self.game_over {
                info!("game over after {} moves", self.moves);
            }
            self.game_over = true;
            self.board_text = format!("{GAME_OVER_BANNER}{}", self.game.render());
            KeyOutcome::GameOver
        } else {
            self.game_over = false;
            self.moves += 1;
            debug!("move {} {}", self.moves, direction.as_str());
            self.board_text = self.game.render();
            KeyOutcome::Moved
        };

        self.status_text = status_line(self.moves);
        outcome
    }
}

impl Session<GameState> {
    /// One-line report of moves, score and largest tile, for the log.
    pub fn summary(&self) -> String {
        format!(
            "{} moves, score {}, max tile {}",
            self.moves,
            self.game.score(),
            self.game.max_tile()
        )
    }
}
