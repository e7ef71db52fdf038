//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece geometry and the board state machine. It has
//! **no dependencies** on rendering, input, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed and moves always produce the same board
//! - **Reversible**: every board mutation can be undone once before it is committed
//! - **Shareable**: piece shapes and rotation rings are immutable and built once
//!
//! # Module Structure
//!
//! - [`pieces`]: piece shapes, text encoding, rotation, skirts, rotation rings
//! - [`catalog`]: the seven standard pieces, built lazily and shared
//! - [`board`]: the grid with incremental stats, place/clear/commit/undo
//! - [`rng`]: seeded piece source for reproducible sessions
//!
//! # Example
//!
//! ```
//! use tetris_brain_core::{catalog, Board};
//! use tetris_brain_types::{PieceKind, PlaceResult};
//!
//! let mut board = Board::new(10, 20);
//! let stick = catalog::ring(PieceKind::Stick).root();
//!
//! let y = board.drop_height(stick, 0);
//! assert_eq!(board.place(stick, 0, y), Ok(PlaceResult::Ok));
//! assert_eq!(board.column_height(0), 4);
//!
//! // Changed our mind: the placement is still pending, so it can be reverted.
//! assert!(board.undo());
//! assert_eq!(board.max_height(), 0);
//! ```

pub mod board;
pub mod catalog;
pub mod pieces;
pub mod rng;

pub use tetris_brain_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use pieces::{PieceShape, RotationRing, ShapeError, MAX_ROTATIONS, MAX_SHAPE_EXTENT};
pub use rng::{PieceQueue, SimpleRng};
