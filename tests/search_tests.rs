//! Move search tests

use tetris_brain::core::{catalog, Board, BoardError};
use tetris_brain::engine::{best_move, best_move_with, Brain, DefaultBrain, SearchWeights};
use tetris_brain::types::PieceKind;

fn ragged_board() -> Board {
    Board::from_rows(&[
        "          ",
        "          ",
        "          ",
        "#         ",
        "##    #  #",
        "### # ## #",
        "######## #",
    ])
}

#[test]
fn test_stick_lies_flat_on_empty_board() {
    let mut board = Board::new(10, 20);
    let ring = catalog::ring(PieceKind::Stick);

    let mv = best_move(&mut board, ring, 20).unwrap().unwrap();

    // Ring order is vertical then horizontal; flat at the far left wins.
    assert_eq!(mv.rotation, 1);
    assert_eq!(mv.shape, ring.get(1));
    assert_eq!((mv.x, mv.y), (0, 0));
    // max height 1, average 0.4, no holes
    assert!((mv.score - (8.0 + 40.0 * 0.4)).abs() < 1e-9);
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board = ragged_board();
    let before = board.clone();

    for kind in PieceKind::ALL {
        best_move(&mut board, catalog::ring(kind), 7).unwrap();
        assert_eq!(board, before, "{:?}", kind);
        assert!(board.is_committed());
    }
}

#[test]
fn test_search_is_deterministic() {
    for kind in PieceKind::ALL {
        let ring = catalog::ring(kind);
        let mut a = ragged_board();
        let mut b = ragged_board();
        assert_eq!(
            best_move(&mut a, ring, 7).unwrap(),
            best_move(&mut b, ring, 7).unwrap()
        );
    }
}

#[test]
fn test_row_fill_is_cleared_before_scoring() {
    let mut board = Board::from_rows(&["    ", "    ", "### ", "### ", "### ", "### "]);
    let ring = catalog::ring(PieceKind::Stick);

    let mv = best_move(&mut board, ring, 6).unwrap().unwrap();

    // Dropping the vertical stick into the well clears all four rows.
    assert_eq!((mv.rotation, mv.x, mv.y), (0, 3, 0));
    assert_eq!(mv.score, 0.0);
    assert_eq!(board.max_height(), 4);
}

#[test]
fn test_height_limit_can_leave_no_legal_move() {
    let mut board = Board::from_rows(&["### ", "### ", "### ", "### "]);
    let ring = catalog::ring(PieceKind::Stick);

    // The vertical stick fits the well exactly when the limit allows 4 rows.
    assert!(best_move(&mut board, ring, 4).unwrap().is_some());
    // One row lower and nothing fits.
    assert_eq!(best_move(&mut board, ring, 3), Ok(None));
}

#[test]
fn test_full_board_has_no_legal_move() {
    let mut board = Board::from_rows(&["####", "####"]);
    for kind in PieceKind::ALL {
        assert_eq!(best_move(&mut board, catalog::ring(kind), 2), Ok(None));
    }
}

#[test]
fn test_search_requires_committed_board() {
    let mut board = Board::new(10, 20);
    let ring = catalog::ring(PieceKind::Pyramid);
    board.place(ring.root(), 0, 0).unwrap();

    assert_eq!(best_move(&mut board, ring, 20), Err(BoardError::Uncommitted));
}

#[test]
fn test_candidates_never_exceed_height_limit() {
    let mut board = ragged_board();
    for kind in PieceKind::ALL {
        if let Some(mv) = best_move(&mut board, catalog::ring(kind), 5).unwrap() {
            assert!(mv.y + mv.shape.height() <= 5, "{:?}: {:?}", kind, mv);
        }
    }
}

#[test]
fn test_custom_weights_through_brain_trait() {
    // Only holes count; the flat right side takes the square without making any.
    let holes_only = SearchWeights {
        max_height: 0.0,
        avg_height: 0.0,
        holes: 1.0,
    };
    let mut board = Board::from_rows(&["     ", "     ", "#  ##", "## ##"]);
    let ring = catalog::ring(PieceKind::Square);

    let by_holes = best_move_with(&mut board, ring, 4, &holes_only)
        .unwrap()
        .unwrap();
    assert_eq!((by_holes.x, by_holes.y), (3, 2));
    assert_eq!(by_holes.score, 0.0);

    let brain = DefaultBrain::new(holes_only);
    let via_trait = brain.best_move(&mut board, ring, 4).unwrap().unwrap();
    assert_eq!(via_trait, by_holes);
}
