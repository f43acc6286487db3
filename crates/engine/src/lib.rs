//! Game engine - session state machine over the pure core
//!
//! [`GameEngine`] owns the board, the active piece and the injected random
//! source. The presentation layer feeds it [`Command`](crate::types::Command)s
//! and frame time, and reads back a [`GameSnapshot`] to draw.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameConfig, GameEngine, TickOutcome};
//! use blockfall_engine::core::SequenceSource;
//! use blockfall_engine::types::{Command, ShapeKind};
//!
//! let mut game = GameEngine::new(GameConfig::default(), SequenceSource::repeat(ShapeKind::T));
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::RotateClockwise);
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.game_over);
//! ```

pub mod config;
pub mod game;
pub mod snapshot;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::GameConfig;
pub use game::{GameEngine, TickOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
