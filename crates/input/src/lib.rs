//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto [`crate::types::Direction`] and detects quit
//! keys. Everything else is left for the session to ignore.

pub mod map;

pub use tui_2048_types as types;

pub use map::{map_key_code, map_key_event, should_quit};
