//! Pieces module - the fixed shape catalog
//!
//! Seven four-cell templates, each paired with a fixed color. The pairing is
//! defined once by [`ShapeKind`] so template and color can never drift apart.

use crate::rng::ShapeSource;
use crate::shape::Shape;
use crate::types::{Color, ShapeKind};

/// Number of catalog entries
pub const CATALOG_LEN: usize = ShapeKind::ALL.len();

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

/// Literal template rows for a kind
pub fn template(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::I => I_ROWS,
        ShapeKind::O => O_ROWS,
        ShapeKind::T => T_ROWS,
        ShapeKind::L => L_ROWS,
        ShapeKind::J => J_ROWS,
        ShapeKind::Z => Z_ROWS,
        ShapeKind::S => S_ROWS,
    }
}

/// Color of a kind
pub fn color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::I => Color::CYAN,
        ShapeKind::O => Color::YELLOW,
        ShapeKind::T => Color::MAGENTA,
        ShapeKind::L => Color::ORANGE,
        ShapeKind::J => Color::BLUE,
        ShapeKind::Z => Color::GREEN,
        ShapeKind::S => Color::RED,
    }
}

/// Fresh working copy of the template for a kind
pub fn get_shape(kind: ShapeKind) -> Shape {
    Shape::from_rows(template(kind))
}

/// Pick one catalog entry uniformly at random, with replacement.
///
/// Consecutive picks may repeat; there is no bag.
pub fn pick_random<S: ShapeSource + ?Sized>(source: &mut S) -> (ShapeKind, Shape, Color) {
    let index = source.next_index(CATALOG_LEN) % CATALOG_LEN;
    let kind = ShapeKind::ALL[index];
    (kind, get_shape(kind), color(kind))
}
