//! Core types module - shared value types and constants
//!
//! This module defines the small value types passed between the board, the piece
//! geometry, and the move search. All types are plain data with no behavior beyond
//! parsing and ordering, making them usable from any driver (CLI, tests, a UI layer).
//!
//! # Coordinates
//!
//! Boards use `(x, y)` with `x` growing to the right and `y` growing **upward**:
//! row 0 is the floor of the well. Piece cells use the same orientation, relative
//! to the piece's lower-left corner.
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns in the visible play area |
//! | `BOARD_HEIGHT` | 20 | Rows in the visible play area |
//!
//! # Examples
//!
//! ```
//! use tetris_brain_types::{PieceKind, PlaceResult, Point};
//!
//! let kind = PieceKind::from_str("pyramid").unwrap();
//! assert_eq!(kind, PieceKind::Pyramid);
//!
//! assert!(PlaceResult::RowFilled.is_success());
//! assert!(PlaceResult::OutOfBounds < PlaceResult::Collision);
//!
//! assert!(Point::new(0, 5) < Point::new(1, 0));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 visible rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default number of pieces an auto-play session drops before stopping
pub const DEFAULT_PIECE_LIMIT: u32 = 500;

/// A single grid cell coordinate.
///
/// Ordering is by `x` first, then `y`; piece bodies are stored sorted this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Outcome of placing a piece on a board, ordered by severity.
///
/// Anything at or below [`PlaceResult::RowFilled`] is a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlaceResult {
    /// Placed, no row completed
    Ok = 0,
    /// Placed, at least one row is now full
    RowFilled = 1,
    /// Piece extends past the board edges; nothing changed
    OutOfBounds = 2,
    /// Piece overlaps filled cells; nothing changed
    Collision = 3,
}

impl PlaceResult {
    /// Numeric severity code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// True for `Ok` and `RowFilled`
    pub fn is_success(self) -> bool {
        self <= PlaceResult::RowFilled
    }
}

/// The seven standard four-cell piece kinds
///
/// - **Stick**: 1x4 bar
/// - **L1** / **L2**: the two L-shaped mirror images
/// - **S1** / **S2**: the two S-shaped mirror images
/// - **Square**: 2x2 block
/// - **Pyramid**: T-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Stick,
    L1,
    L2,
    S1,
    S2,
    Square,
    Pyramid,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Stick,
        PieceKind::L1,
        PieceKind::L2,
        PieceKind::S1,
        PieceKind::S2,
        PieceKind::Square,
        PieceKind::Pyramid,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_brain_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("stick"), Some(PieceKind::Stick));
    /// assert_eq!(PieceKind::from_str("S2"), Some(PieceKind::S2));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stick" => Some(PieceKind::Stick),
            "l1" => Some(PieceKind::L1),
            "l2" => Some(PieceKind::L2),
            "s1" => Some(PieceKind::S1),
            "s2" => Some(PieceKind::S2),
            "square" => Some(PieceKind::Square),
            "pyramid" => Some(PieceKind::Pyramid),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Stick => "stick",
            PieceKind::L1 => "l1",
            PieceKind::L2 => "l2",
            PieceKind::S1 => "s1",
            PieceKind::S2 => "s2",
            PieceKind::Square => "square",
            PieceKind::Pyramid => "pyramid",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}
