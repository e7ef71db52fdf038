//! Pieces module - immutable piece geometry and rotation rings
//!
//! A [`PieceShape`] is a sorted, deduplicated set of cells anchored at the lower-left
//! corner of its bounding box. Width, height, and skirt are derived once at
//! construction. Rotation is a pure function producing a new shape; a
//! [`RotationRing`] stores the distinct orientations reached by rotating until the
//! root shape comes back around.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::types::Point;

/// Upper bound on distinct orientations of any shape (four quarter turns)
pub const MAX_ROTATIONS: usize = 4;

/// Largest width or height a shape may span
pub const MAX_SHAPE_EXTENT: i32 = 256;

/// Errors raised while building shapes or rotation rings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("piece text has an odd number of coordinates ({0})")]
    OddTokenCount(usize),

    #[error("piece text has a non-integer coordinate {token:?}")]
    InvalidToken { token: String },

    #[error("piece has no cells")]
    Empty,

    #[error("piece cell {0} has a negative coordinate")]
    NegativeCoordinate(Point),

    #[error("piece cell {0} lies beyond the {}-cell shape limit", MAX_SHAPE_EXTENT)]
    CoordinateTooLarge(Point),

    #[error("rotations did not return to the root shape within {0} steps")]
    RingNotClosed(usize),
}

/// Immutable piece geometry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceShape {
    /// Cells sorted by (x, y), no duplicates
    body: Vec<Point>,
    width: i32,
    height: i32,
    /// Lowest occupied y per column; `height` for a column with no cells
    skirt: Vec<i32>,
}

impl PieceShape {
    /// Build a shape from a list of cells.
    ///
    /// Input order and duplicates do not matter: two shapes built from the same cell
    /// set compare equal.
    pub fn new<I, P>(cells: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut body: Vec<Point> = cells.into_iter().map(Into::into).collect();
        if let Some(&bad) = body.iter().find(|p| p.x < 0 || p.y < 0) {
            return Err(ShapeError::NegativeCoordinate(bad));
        }
        if let Some(&bad) = body
            .iter()
            .find(|p| p.x >= MAX_SHAPE_EXTENT || p.y >= MAX_SHAPE_EXTENT)
        {
            return Err(ShapeError::CoordinateTooLarge(bad));
        }
        body.sort_unstable();
        body.dedup();
        if body.is_empty() {
            return Err(ShapeError::Empty);
        }

        let width = body.iter().map(|p| p.x).max().unwrap_or(0) + 1;
        let height = body.iter().map(|p| p.y).max().unwrap_or(0) + 1;

        let mut skirt = vec![height; width as usize];
        for p in &body {
            let lowest = &mut skirt[p.x as usize];
            *lowest = (*lowest).min(p.y);
        }

        Ok(Self {
            body,
            width,
            height,
            skirt,
        })
    }

    /// Parse whitespace-separated `x y` pairs, e.g. `"0 0 1 0 1 1 2 0"`.
    pub fn parse(text: &str) -> Result<Self, ShapeError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() % 2 != 0 {
            return Err(ShapeError::OddTokenCount(tokens.len()));
        }

        let mut coords = Vec::with_capacity(tokens.len());
        for token in tokens {
            let value = token.parse::<i32>().map_err(|_| ShapeError::InvalidToken {
                token: token.to_string(),
            })?;
            coords.push(value);
        }

        Self::new(coords.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1])))
    }

    /// Occupied cells, sorted by x then y
    pub fn cells(&self) -> &[Point] {
        &self.body
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Lowest occupied row offset for each column in `0..width`
    pub fn skirt(&self) -> &[i32] {
        &self.skirt
    }

    /// Quarter turn counter-clockwise: `(x, y) -> (height - 1 - y, x)`.
    ///
    /// The source shape is untouched.
    pub fn next_rotation(&self) -> PieceShape {
        let rotated = self
            .body
            .iter()
            .map(|p| Point::new(self.height - 1 - p.y, p.x));
        // Rotating a valid shape keeps every coordinate in range.
        match Self::new(rotated) {
            Ok(shape) => shape,
            Err(_) => unreachable!("rotation of a non-empty, non-negative shape"),
        }
    }
}

impl FromStr for PieceShape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats as the text encoding accepted by [`PieceShape::parse`].
impl fmt::Display for PieceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", p.x, p.y)?;
        }
        Ok(())
    }
}

/// Cyclic catalog of a piece's distinct orientations.
///
/// Index 0 is the root shape; the successor of index `i` is `(i + 1) % len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationRing {
    variants: ArrayVec<PieceShape, MAX_ROTATIONS>,
}

impl RotationRing {
    /// Rotate `root` until it reappears, keeping each intermediate orientation.
    ///
    /// Shapes not anchored at the origin never return to themselves and are
    /// rejected with [`ShapeError::RingNotClosed`].
    pub fn build(root: PieceShape) -> Result<Self, ShapeError> {
        let mut current = root.next_rotation();
        let mut variants = ArrayVec::new();
        variants.push(root);

        while current != variants[0] {
            if variants.is_full() {
                return Err(ShapeError::RingNotClosed(MAX_ROTATIONS));
            }
            let next = current.next_rotation();
            variants.push(current);
            current = next;
        }

        Ok(Self { variants })
    }

    /// Number of distinct orientations (1..=4)
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false; a ring holds at least its root
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn root(&self) -> &PieceShape {
        &self.variants[0]
    }

    /// Orientation at `index`, wrapping around the ring
    pub fn get(&self, index: usize) -> &PieceShape {
        &self.variants[index % self.variants.len()]
    }

    /// Index of the orientation after `index`
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.variants.len()
    }

    /// Orientation after `index`
    pub fn next(&self, index: usize) -> &PieceShape {
        self.get(self.next_index(index))
    }

    /// Distinct orientations in rotation order, starting at the root
    pub fn variants(&self) -> &[PieceShape] {
        &self.variants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PieceShape> {
        self.variants.iter()
    }
}

impl<'a> IntoIterator for &'a RotationRing {
    type Item = &'a PieceShape;
    type IntoIter = std::slice::Iter<'a, PieceShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
