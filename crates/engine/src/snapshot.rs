use arrayvec::ArrayVec;

use crate::core::{CellPos, Piece};
use crate::types::{Cell, Color, ShapeKind};

/// Read-only view of the falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    /// Absolute (row, col) cells, shape row-major order
    pub cells: ArrayVec<CellPos, 16>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color,
            cells: piece.occupied_cells().collect(),
        }
    }
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Settled cells, row-major
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub game_over: bool,
    pub fall_interval_ms: u32,
    pub elapsed_ms: u64,
}

impl GameSnapshot {
    /// Settled cell at (row, col), None when out of bounds
    pub fn cell(&self, row: i16, col: i16) -> Option<Cell> {
        if row < 0 || col < 0 || row >= self.height as i16 || col >= self.width as i16 {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// Whether the active piece covers (row, col)
    pub fn is_active_at(&self, row: i16, col: i16) -> bool {
        self.active
            .as_ref()
            .map_or(false, |a| a.cells.contains(&(row, col)))
    }
}
