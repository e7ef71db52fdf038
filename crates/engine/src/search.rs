//! Brute-force move search
//!
//! Every orientation in a piece's ring is tried at every column. Each candidate is
//! dropped, placed, (rows cleared,) scored, and undone, so the board is left exactly
//! as it was found. Lower scores are better.

use crate::core::{Board, BoardError, PieceShape, RotationRing};
use crate::types::PlaceResult;

/// Heuristic weights for [`rate_board`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWeights {
    /// Per row of the tallest column
    pub max_height: f64,
    /// Per row of the average column height
    pub avg_height: f64,
    /// Per empty cell buried under its column's top
    pub holes: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            max_height: 8.0,
            avg_height: 40.0,
            holes: 1.25,
        }
    }
}

/// A scored candidate placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move<'r> {
    /// Orientation to place
    pub shape: &'r PieceShape,
    /// Index of `shape` within its ring
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    pub score: f64,
}

/// A move-selection strategy
pub trait Brain {
    /// Pick a placement for `ring` on `board`, or `Ok(None)` when nothing fits
    /// under `height_limit`.
    ///
    /// The board must be committed and is returned unchanged.
    fn best_move<'r>(
        &self,
        board: &mut Board,
        ring: &'r RotationRing,
        height_limit: usize,
    ) -> Result<Option<Move<'r>>, BoardError>;
}

/// The weighted height/holes heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultBrain {
    pub weights: SearchWeights,
}

impl DefaultBrain {
    pub fn new(weights: SearchWeights) -> Self {
        Self { weights }
    }
}

impl Brain for DefaultBrain {
    fn best_move<'r>(
        &self,
        board: &mut Board,
        ring: &'r RotationRing,
        height_limit: usize,
    ) -> Result<Option<Move<'r>>, BoardError> {
        best_move_with(board, ring, height_limit, &self.weights)
    }
}

/// Search with [`SearchWeights::default`]
pub fn best_move<'r>(
    board: &mut Board,
    ring: &'r RotationRing,
    height_limit: usize,
) -> Result<Option<Move<'r>>, BoardError> {
    best_move_with(board, ring, height_limit, &SearchWeights::default())
}

/// Search every orientation x column and return the lowest-scoring placement.
///
/// Ties keep the first candidate found (ring order, then ascending x). Candidates
/// whose top would rise above `height_limit` are skipped. Returns `Ok(None)` when no
/// candidate is legal, and [`BoardError::Uncommitted`] if the board has a pending
/// change.
pub fn best_move_with<'r>(
    board: &mut Board,
    ring: &'r RotationRing,
    height_limit: usize,
    weights: &SearchWeights,
) -> Result<Option<Move<'r>>, BoardError> {
    if !board.is_committed() {
        return Err(BoardError::Uncommitted);
    }

    let mut best: Option<Move<'r>> = None;

    for (rotation, shape) in ring.iter().enumerate() {
        let columns = board.width() as i32 - shape.width() + 1;
        for x in 0..columns {
            let y = board.drop_height(shape, x);
            if y as usize + shape.height() as usize > height_limit {
                continue;
            }

            let result = board.place(shape, x, y)?;
            if result.is_success() {
                if result == PlaceResult::RowFilled {
                    board.clear_rows();
                }
                let score = rate_board(board, weights);
                if best.map_or(true, |b| score < b.score) {
                    best = Some(Move {
                        shape,
                        rotation,
                        x,
                        y,
                        score,
                    });
                }
            }
            board.undo();
        }
    }

    Ok(best)
}

/// Score a board; lower is better.
///
/// `max_height * w + avg_height * w + holes * w`, where a hole is an empty cell
/// below the topmost filled cell of its column.
pub fn rate_board(board: &Board, weights: &SearchWeights) -> f64 {
    let width = board.width();
    if width == 0 {
        return 0.0;
    }

    let mut sum_height = 0usize;
    let mut holes = 0usize;
    for x in 0..width as i32 {
        let column = board.column_height(x);
        sum_height += column;
        holes += (0..column.saturating_sub(1) as i32)
            .filter(|&y| !board.is_occupied(x, y))
            .count();
    }

    let avg_height = sum_height as f64 / width as f64;
    weights.max_height * board.max_height() as f64
        + weights.avg_height * avg_height
        + weights.holes * holes as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::types::PieceKind;

    #[test]
    fn test_rate_empty_board_is_zero() {
        let board = Board::new(10, 20);
        assert_eq!(rate_board(&board, &SearchWeights::default()), 0.0);
    }

    #[test]
    fn test_rate_counts_holes_below_column_top() {
        // Column 0 has height 3 with two empty cells beneath.
        let board = Board::from_rows(&["#  ", "   ", "  #"]);
        let weights = SearchWeights {
            max_height: 0.0,
            avg_height: 0.0,
            holes: 1.0,
        };
        assert_eq!(rate_board(&board, &weights), 2.0);
    }

    #[test]
    fn test_rate_default_weights() {
        // heights [2, 1, 0], one hole at (0, 0)
        let board = Board::from_rows(&["#  ", " # "]);
        let expected = 8.0 * 2.0 + 40.0 * 1.0 + 1.25 * 1.0;
        assert_eq!(rate_board(&board, &SearchWeights::default()), expected);
    }

    #[test]
    fn test_search_rejects_uncommitted_board() {
        let mut board = Board::new(4, 4);
        let ring = catalog::ring(PieceKind::Square);
        board.place(ring.root(), 0, 0).unwrap();
        assert_eq!(
            best_move(&mut board, ring, 4),
            Err(BoardError::Uncommitted)
        );
    }

    #[test]
    fn test_square_prefers_leftmost_on_empty_board() {
        let mut board = Board::new(6, 10);
        let mv = best_move(&mut board, catalog::ring(PieceKind::Square), 10)
            .unwrap()
            .unwrap();
        assert_eq!((mv.rotation, mv.x, mv.y), (0, 0, 0));
        assert!(board.is_committed());
        assert_eq!(board.max_height(), 0);
    }
}
