//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! Reference well dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Fall Speed Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Presentation frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 500 | Gravity interval at score 0 |
//! | `FALL_FLOOR_MS` | 100 | Fastest gravity interval |
//! | `FALL_STEP_MS` | 50 | Speed-up per `SCORE_PER_SPEED_STEP` points |
//! | `SCORE_PER_SPEED_STEP` | 1000 | Points needed for one speed-up step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ScoringPolicy, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//!
//! // Parse a command
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! // Scoring policy
//! assert_eq!(ScoringPolicy::from_str("linear"), Some(ScoringPolicy::Linear));
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Presentation frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at score 0
pub const BASE_FALL_MS: u32 = 500;

/// Gravity never gets faster than this
pub const FALL_FLOOR_MS: u32 = 100;

/// Gravity speed-up per step
pub const FALL_STEP_MS: u32 = 50;

/// Points per gravity speed-up step
pub const SCORE_PER_SPEED_STEP: u32 = 1000;

/// Base points per cleared line
pub const LINE_SCORE: u32 = 100;

/// 24-bit RGB color of a settled or falling cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const ORANGE: Color = Color::new(255, 165, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const RED: Color = Color::new(255, 0, 0);
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell settled with the color of the piece that filled it
pub type Cell = Option<Color>;

/// The seven catalog entries, in catalog order.
///
/// Each entry has a fixed shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **L**: Orange
/// - **J**: Blue
/// - **Z**: Green
/// - **S**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl ShapeKind {
    /// All kinds in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
    ];

    /// Position of this kind in the catalog.
    pub fn index(self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::L => 3,
            ShapeKind::J => 4,
            ShapeKind::Z => 5,
            ShapeKind::S => 6,
        }
    }

    /// Kind at catalog position `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
        }
    }
}

/// Commands accepted by the game engine
///
/// Produced by the presentation layer (keyboard) and by the frame clock
/// (`Tick`). Each one is validated by the engine and either applied or
/// silently rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateClockwise,
    /// One gravity step
    Tick,
    /// Start a new session
    Reset,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateClockwise"), Some(Command::RotateClockwise));
    /// assert_eq!(Command::from_str("TICK"), Some(Command::Tick));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotateclockwise" | "rotatecw" => Some(Command::RotateClockwise),
            "tick" => Some(Command::Tick),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateClockwise => "rotateClockwise",
            Command::Tick => "tick",
            Command::Reset => "reset",
        }
    }
}

/// How cleared lines turn into points.
///
/// - **Linear**: 100 points per line, gravity never speeds up
/// - **Exponential**: `100 * 2^(lines - 1)` per clear, gravity speeds up
///   by `FALL_STEP_MS` every `SCORE_PER_SPEED_STEP` points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    Linear,
    #[default]
    Exponential,
}

impl ScoringPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Some(ScoringPolicy::Linear),
            "exponential" | "exp" => Some(ScoringPolicy::Exponential),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPolicy::Linear => "linear",
            ScoringPolicy::Exponential => "exponential",
        }
    }
}
