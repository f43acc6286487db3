//! Shape catalog, rotation and piece geometry tests

use tui_blockfall::core::{get_shape, pick_random, rotate_clockwise, Board, Piece, SequenceSource};
use tui_blockfall::types::{Color, ShapeKind, BOARD_WIDTH};

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let original = get_shape(kind);
        let mut shape = original.clone();
        for _ in 0..4 {
            shape = rotate_clockwise(&shape);
        }
        assert_eq!(shape, original, "{:?} after 4 rotations", kind);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in ShapeKind::ALL {
        let mut shape = get_shape(kind);
        for _ in 0..4 {
            let rotated = rotate_clockwise(&shape);
            assert_eq!(rotated.cell_count(), shape.cell_count());
            assert_eq!(rotated.rows(), shape.cols());
            assert_eq!(rotated.cols(), shape.rows());
            shape = rotated;
        }
    }
}

#[test]
fn test_rotation_formula() {
    // new[row][col] = old[N - 1 - col][row]
    for kind in ShapeKind::ALL {
        let old = get_shape(kind);
        let new = rotate_clockwise(&old);
        let n = old.rows();
        for row in 0..new.rows() {
            for col in 0..new.cols() {
                assert_eq!(new.get(row, col), old.get(n - 1 - col, row));
            }
        }
    }
}

#[test]
fn test_occupied_cells_count_matches_shape_everywhere() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::new(kind, BOARD_WIDTH);
        for _ in 0..4 {
            for x in -3..12 {
                for y in -3..22 {
                    let moved = Piece { x, y, ..piece.clone() };
                    assert_eq!(moved.occupied_cells().count(), moved.shape.cell_count());
                }
            }
            piece = piece.rotated();
        }
    }
}

#[test]
fn test_occupied_cells_is_recomputed() {
    let mut piece = Piece::new(ShapeKind::O, BOARD_WIDTH);
    let first: Vec<_> = piece.occupied_cells().collect();
    piece.y += 3;
    let second: Vec<_> = piece.occupied_cells().collect();

    assert_eq!(first, vec![(0, 4), (0, 5), (1, 4), (1, 5)]);
    assert_eq!(second, vec![(3, 4), (3, 5), (4, 4), (4, 5)]);
}

#[test]
fn test_i_piece_spawn_and_walk_right() {
    let board = Board::new();
    let mut piece = Piece::new(ShapeKind::I, board.width());
    assert_eq!((piece.x, piece.y), (3, 0));

    for _ in 0..3 {
        let candidate = piece.shifted(1, 0);
        assert!(board.can_place(candidate.occupied_cells()));
        piece = candidate;
    }
    assert_eq!(piece.x + 4, board.width() as i16);
    assert!(!board.can_place(piece.shifted(1, 0).occupied_cells()));
}

#[test]
fn test_spawn_center_for_every_kind() {
    for kind in ShapeKind::ALL {
        let piece = Piece::new(kind, 10);
        let expected = 10 / 2 - piece.shape.cols() as i16 / 2;
        assert_eq!(piece.x, expected, "{:?}", kind);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_catalog_color_pairing() {
    let expected = [
        (ShapeKind::I, Color::CYAN),
        (ShapeKind::O, Color::YELLOW),
        (ShapeKind::T, Color::MAGENTA),
        (ShapeKind::L, Color::ORANGE),
        (ShapeKind::J, Color::BLUE),
        (ShapeKind::Z, Color::GREEN),
        (ShapeKind::S, Color::RED),
    ];
    let mut source = SequenceSource::new(ShapeKind::ALL.to_vec());
    for (kind, color) in expected {
        let (picked, shape, picked_color) = pick_random(&mut source);
        assert_eq!(picked, kind);
        assert_eq!(shape, get_shape(kind));
        assert_eq!(picked_color, color);
    }
}
