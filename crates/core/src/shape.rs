//! Shape module - boolean occupancy matrices and the rotation transform
//!
//! A shape is a small row-major matrix (at most 4x4) where `true` marks an
//! occupied cell. Shapes are stored inline so copying one never allocates.

use arrayvec::ArrayVec;

/// Largest row or column count a shape may have
pub const MAX_SHAPE_DIM: usize = 4;

/// Row-major occupancy matrix of a piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: ArrayVec<bool, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>,
}

impl Shape {
    /// Build a shape from literal rows of `0`/`1`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4. Catalog
    /// templates are literals, so this only fires on a programming error.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.len());
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&row_count) && (1..=MAX_SHAPE_DIM).contains(&col_count),
            "shape must be between 1x1 and 4x4"
        );
        assert!(
            rows.iter().all(|r| r.len() == col_count),
            "shape rows must have equal length"
        );

        let mut cells = ArrayVec::new();
        for row in rows {
            for &v in row.iter() {
                cells.push(v != 0);
            }
        }

        Self {
            rows: row_count as u8,
            cols: col_count as u8,
            cells,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied. Out of range reads as empty.
    pub fn get(&self, row: u8, col: u8) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Relative (row, col) offsets of occupied cells, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(move |(i, _)| ((i / cols) as u8, (i % cols) as u8))
    }
}

/// Rotate a shape 90° clockwise.
///
/// For an N x M source the result is M x N with
/// `new[row][col] = old[N - 1 - col][row]`. The input is left untouched so the
/// caller can validate the candidate before committing it.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let n = shape.rows;
    let m = shape.cols;

    let mut cells = ArrayVec::new();
    for row in 0..m {
        for col in 0..n {
            cells.push(shape.get(n - 1 - col, row));
        }
    }

    Shape {
        rows: m,
        cols: n,
        cells,
    }
}
