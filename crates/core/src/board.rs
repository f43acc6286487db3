//! Board module - manages the game grid
//!
//! The board is a fixed `height x width` grid where each cell is either empty
//! or holds the color of a settled piece. Uses a flat row-major vector.
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge.
//!
//! Rows above the top edge (`row < 0`) are open air. Pieces may poke into them
//! while spawning or rotating, so they are never blocked.

use crate::piece::{CellPos, Piece};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat vector of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the reference size (10 x 20)
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board of any non-empty size
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board must not be empty");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from explicit rows, top row first.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged, empty, or more than 255 rows or columns.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height > 0 && width > 0, "board must not be empty");
        assert!(
            rows.iter().all(|r| r.len() == width),
            "board rows must have equal length"
        );
        let (Ok(width), Ok(height)) = (u8::try_from(width), u8::try_from(height)) else {
            panic!("board is limited to 255 x 255 cells");
        };

        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i16 || col >= self.width as i16 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell at (row, col) would collide.
    ///
    /// Blocked when outside the side walls, at or below the floor, or on a
    /// settled cell. Rows above the top are never blocked.
    pub fn is_cell_blocked(&self, row: i16, col: i16) -> bool {
        if col < 0 || col >= self.width as i16 || row >= self.height as i16 {
            return true;
        }
        row >= 0 && matches!(self.get(row, col), Some(Some(_)))
    }

    /// True iff none of `cells` is blocked
    pub fn can_place<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = CellPos>,
    {
        cells
            .into_iter()
            .all(|(row, col)| !self.is_cell_blocked(row, col))
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Does not validate: callers settle only after a failed downward move has
    /// confirmed the piece landed on a legal spot. Cells outside the grid are
    /// skipped.
    pub fn settle(&mut self, piece: &Piece) {
        for (row, col) in piece.occupied_cells() {
            self.set(row, col, Some(piece.color));
        }
    }

    /// Check if a row is completely filled. Out-of-range rows are not full.
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).map_or(false, row_full)
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and drop down; the same number
    /// of empty rows are padded in at the top. The grid is rebuilt from the
    /// surviving rows, so no index bookkeeping happens while scanning.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let kept: Vec<Cell> = self
            .cells
            .chunks(width)
            .filter(|row| !row_full(row))
            .flatten()
            .copied()
            .collect();

        let cleared = self.height as usize - kept.len() / width;
        if cleared == 0 {
            return 0;
        }

        let mut cells = vec![None; cleared * width];
        cells.extend(kept);
        self.cells = cells;
        cleared
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

fn row_full(cells: &[Cell]) -> bool {
    cells.iter().all(|cell| cell.is_some())
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
