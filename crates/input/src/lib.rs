//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::Command`]s, one command per key press.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
