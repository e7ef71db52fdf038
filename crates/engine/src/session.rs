//! Headless auto-play session
//!
//! Drives a board the way an interactive front end would, minus timers and input:
//! draw a piece, ask the brain for a move, apply it, clear rows, commit. The session
//! ends when the brain reports no legal move or the piece limit is reached.

use serde::{Deserialize, Serialize};

use crate::core::{catalog, Board, BoardError, PieceQueue};
use crate::search::{Brain, DefaultBrain, Move};
use crate::types::{PieceKind, PlaceResult, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_PIECE_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid session config: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Runtime parameters for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub width: usize,
    /// Visible rows; moves never stack above this
    pub height: usize,
    pub seed: u32,
    /// Stop after this many pieces have been placed
    pub piece_limit: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH as usize,
            height: BOARD_HEIGHT as usize,
            seed: 1,
            piece_limit: DEFAULT_PIECE_LIMIT,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.width == 0 {
            return Err(SessionError::InvalidConfig("width must be > 0"));
        }
        if self.height == 0 {
            return Err(SessionError::InvalidConfig("height must be > 0"));
        }
        Ok(())
    }
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The drawn piece fits nowhere under the height limit
    NoLegalMove,
    /// `piece_limit` pieces were placed
    PieceLimit,
}

/// Result of a single [`Session::step`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Placed {
        kind: PieceKind,
        mv: Move<'static>,
        rows_cleared: usize,
    },
    /// The piece could not be placed; the session is over
    NoMove { kind: PieceKind },
    /// The session had already ended
    Finished(EndReason),
}

/// Totals reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u32,
    pub pieces: u32,
    pub rows_cleared: u64,
    pub max_height: usize,
    pub end: Option<EndReason>,
}

/// An auto-play game on one board
#[derive(Debug, Clone)]
pub struct Session<B: Brain = DefaultBrain> {
    config: SessionConfig,
    board: Board,
    queue: PieceQueue,
    brain: B,
    pieces: u32,
    rows_cleared: u64,
    end: Option<EndReason>,
}

impl Session<DefaultBrain> {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        Self::with_brain(config, DefaultBrain::default())
    }
}

impl<B: Brain> Session<B> {
    pub fn with_brain(config: SessionConfig, brain: B) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.width, config.height),
            queue: PieceQueue::new(config.seed),
            brain,
            pieces: 0,
            rows_cleared: 0,
            end: None,
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The kind the next [`Session::step`] will play
    pub fn next_kind(&self) -> PieceKind {
        self.queue.peek()
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Play one piece
    pub fn step(&mut self) -> Result<StepOutcome, SessionError> {
        if let Some(reason) = self.end {
            return Ok(StepOutcome::Finished(reason));
        }
        if self.pieces >= self.config.piece_limit {
            self.end = Some(EndReason::PieceLimit);
            return Ok(StepOutcome::Finished(EndReason::PieceLimit));
        }

        let kind = self.queue.draw();
        let ring = catalog::ring(kind);
        let Some(mv) = self
            .brain
            .best_move(&mut self.board, ring, self.config.height)?
        else {
            self.end = Some(EndReason::NoLegalMove);
            return Ok(StepOutcome::NoMove { kind });
        };

        let result = self.board.place(mv.shape, mv.x, mv.y)?;
        let rows_cleared = if result == PlaceResult::RowFilled {
            self.board.clear_rows()
        } else {
            0
        };
        self.board.commit();

        self.pieces += 1;
        self.rows_cleared += rows_cleared as u64;

        Ok(StepOutcome::Placed {
            kind,
            mv,
            rows_cleared,
        })
    }

    /// Step until the session ends
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.config.seed,
            pieces: self.pieces,
            rows_cleared: self.rows_cleared,
            max_height: self.board.max_height(),
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = SessionConfig {
            width: 0,
            ..SessionConfig::default()
        };
        assert_eq!(
            Session::new(config).unwrap_err(),
            SessionError::InvalidConfig("width must be > 0")
        );
    }

    #[test]
    fn test_step_commits_each_piece() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let expected = session.next_kind();
        match session.step().unwrap() {
            StepOutcome::Placed { kind, .. } => assert_eq!(kind, expected),
            other => panic!("expected placement, got {:?}", other),
        }
        assert!(session.board().is_committed());
        assert_eq!(session.summary().pieces, 1);
    }

    #[test]
    fn test_zero_piece_limit_finishes_immediately() {
        let config = SessionConfig {
            piece_limit: 0,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        assert_eq!(
            session.step().unwrap(),
            StepOutcome::Finished(EndReason::PieceLimit)
        );
        assert_eq!(session.run().unwrap().pieces, 0);
    }

    #[test]
    fn test_summary_serializes_snake_case_reason() {
        let summary = SessionSummary {
            seed: 4,
            pieces: 10,
            rows_cleared: 2,
            max_height: 3,
            end: Some(EndReason::NoLegalMove),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["end"], "no_legal_move");
        assert_eq!(json["rows_cleared"], 2);
    }
}
