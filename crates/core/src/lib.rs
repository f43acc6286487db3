//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid model and game rules for a falling-block
//! puzzle. It has **zero dependencies** on terminal, input, or I/O, making it:
//!
//! - **Deterministic**: randomness is injected through [`ShapeSource`]
//! - **Testable**: every rule is a plain function or method on plain data
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shape`]: occupancy matrices and the clockwise rotation transform
//! - [`pieces`]: the seven-entry shape catalog and random picking
//! - [`piece`]: the falling piece and its candidate moves
//! - [`board`]: the well, with collision checks, settling and line clearing
//! - [`rng`]: injected random sources
//! - [`scoring`]: line-clear points and fall-speed progression
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, Piece};
//! use blockfall_core::types::ShapeKind;
//!
//! let board = Board::new();
//! let piece = Piece::new(ShapeKind::I, board.width());
//!
//! // Candidate moves are validated before they are committed.
//! let right = piece.shifted(1, 0);
//! assert!(board.can_place(right.occupied_cells()));
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{CellPos, Piece};
pub use pieces::{get_shape, pick_random, CATALOG_LEN};
pub use rng::{RandomSource, SequenceSource, ShapeSource};
pub use scoring::{calculate_line_score, fall_interval_ms, FallSpeed};
pub use shape::{rotate_clockwise, Shape};
