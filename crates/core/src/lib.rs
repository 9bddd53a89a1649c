//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules and the session glue that turns key
//! presses into moves. It has **no dependencies** on the terminal or any I/O,
//! making it:
//!
//! - **Deterministic**: the engine spawns tiles by rule, never at random
//! - **Testable**: the session is generic over [`TileGame`] and can run on a mock
//! - **Portable**: the same session drives the terminal binary or a headless test
//!
//! # Module Structure
//!
//! - [`game`]: the [`TileGame`] trait (four directional mutators, game-over query, render)
//! - [`game_state`]: the 4x4 board implementing [`TileGame`]
//! - [`session`]: move counter, key dispatch and the two text panes
//! - [`error`]: construction errors
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, KeyOutcome, Session};
//! use tui_2048_types::KEY_LEFT;
//!
//! let mut session = Session::new(GameState::new());
//! assert_eq!(session.handle_key_code(KEY_LEFT), KeyOutcome::Moved);
//! assert_eq!(session.handle_key_code(13), KeyOutcome::Ignored);
//! assert_eq!(session.moves(), 1);
//! ```

pub mod error;
pub mod game;
pub mod game_state;
pub mod session;

pub use tui_2048_types as types;

pub use error::BoardError;
pub use game::TileGame;
pub use game_state::GameState;
pub use session::{KeyOutcome, Session};
