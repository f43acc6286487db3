//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders engine snapshots into a simple framebuffer that can be flushed
//! to a terminal backend.
//!
//! Goals:
//! - Keep `core` and `engine` deterministic and testable
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)
//! - Only rewrite cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_spans, encode_changes, encode_frame, Span, TerminalRenderer};
