//! Engine - move search and auto-play on top of the core board
//!
//! - [`search`]: the brute-force heuristic search ([`best_move`]) and the [`Brain`]
//!   trait drivers use to plug in a strategy
//! - [`session`]: a headless game loop that plays pieces from a seeded queue until
//!   no move fits

pub mod search;
pub mod session;

pub use tetris_brain_core as core;
pub use tetris_brain_types as types;

pub use search::{
    best_move, best_move_with, rate_board, Brain, DefaultBrain, Move, SearchWeights,
};
pub use session::{
    EndReason, Session, SessionConfig, SessionError, SessionSummary, StepOutcome,
};
