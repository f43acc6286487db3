//! Piece module - the currently falling piece
//!
//! A piece is a working copy of a catalog shape plus its color and the board
//! offset of the shape's top-left corner. Moves and rotations never mutate a
//! piece in place: they produce a candidate that the engine validates against
//! the board before swapping it in.

use crate::pieces::{color, get_shape};
use crate::shape::{rotate_clockwise, Shape};
use crate::types::{Color, ShapeKind};

/// Absolute board coordinate as (row, col)
pub type CellPos = (i16, i16);

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Color,
    /// Column of the shape's left edge
    pub x: i16,
    /// Row of the shape's top edge
    pub y: i16,
}

impl Piece {
    /// Create a piece centered horizontally on a board `board_width` wide, top row at 0.
    pub fn spawn(kind: ShapeKind, shape: Shape, color: Color, board_width: u8) -> Self {
        let x = (board_width / 2) as i16 - (shape.cols() / 2) as i16;
        Self {
            kind,
            shape,
            color,
            x,
            y: 0,
        }
    }

    /// Spawn the catalog entry for `kind`
    pub fn new(kind: ShapeKind, board_width: u8) -> Self {
        Self::spawn(kind, get_shape(kind), color(kind), board_width)
    }

    /// Absolute (row, col) of every occupied cell, in shape row-major order.
    ///
    /// Recomputed from shape and position on every call.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.shape
            .offsets()
            .map(move |(r, c)| (self.y + r as i16, self.x + c as i16))
    }

    /// Candidate moved by (dx, dy)
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Candidate with `shape` at the same position
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self {
            shape,
            ..self.clone()
        }
    }

    /// Candidate rotated 90° clockwise about the same top-left corner
    pub fn rotated(&self) -> Self {
        self.with_shape(rotate_clockwise(&self.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_piece() {
        let i = Piece::new(ShapeKind::I, 10);
        assert_eq!((i.x, i.y), (3, 0));

        let o = Piece::new(ShapeKind::O, 10);
        assert_eq!((o.x, o.y), (4, 0));

        let t = Piece::new(ShapeKind::T, 10);
        assert_eq!((t.x, t.y), (4, 0));
    }

    #[test]
    fn test_occupied_cells_absolute() {
        let t = Piece::new(ShapeKind::T, 10);
        let cells: Vec<_> = t.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 4), (0, 5), (0, 6), (1, 5)]);
    }

    #[test]
    fn test_shifted_leaves_original() {
        let piece = Piece::new(ShapeKind::L, 10);
        let moved = piece.shifted(-1, 2);
        assert_eq!((moved.x, moved.y), (piece.x - 1, piece.y + 2));
        assert_eq!(moved.shape, piece.shape);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_rotated_keeps_position_and_color() {
        let piece = Piece::new(ShapeKind::J, 10);
        let rotated = piece.rotated();
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
        assert_eq!(rotated.color, piece.color);
        assert_eq!(rotated.shape.rows(), piece.shape.cols());
    }
}
