//! Catalog of the seven standard pieces
//!
//! Rings are built on first use and shared read-only for the rest of the process.

use std::sync::OnceLock;

use crate::pieces::{PieceShape, RotationRing};
use crate::types::PieceKind;

pub const STICK_STR: &str = "0 0  0 1  0 2  0 3";
pub const L1_STR: &str = "0 0  0 1  0 2  1 0";
pub const L2_STR: &str = "0 0  1 0  1 1  1 2";
pub const S1_STR: &str = "0 0  1 0  1 1  2 1";
pub const S2_STR: &str = "0 1  1 1  1 0  2 0";
pub const SQUARE_STR: &str = "0 0  0 1  1 0  1 1";
pub const PYRAMID_STR: &str = "0 0  1 0  1 1  2 0";

static RINGS: OnceLock<[RotationRing; 7]> = OnceLock::new();

/// Text encoding of a kind's root orientation
pub fn encoding(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Stick => STICK_STR,
        PieceKind::L1 => L1_STR,
        PieceKind::L2 => L2_STR,
        PieceKind::S1 => S1_STR,
        PieceKind::S2 => S2_STR,
        PieceKind::Square => SQUARE_STR,
        PieceKind::Pyramid => PYRAMID_STR,
    }
}

/// All rings, indexed by [`PieceKind::index`]
pub fn rings() -> &'static [RotationRing; 7] {
    RINGS.get_or_init(|| PieceKind::ALL.map(build_ring))
}

/// The shared ring for `kind`
pub fn ring(kind: PieceKind) -> &'static RotationRing {
    &rings()[kind.index()]
}

fn build_ring(kind: PieceKind) -> RotationRing {
    // The encodings above are fixed; a failure here is a broken constant, not input.
    match PieceShape::parse(encoding(kind)).and_then(RotationRing::build) {
        Ok(ring) => ring,
        Err(err) => panic!("canonical {} piece is malformed: {err}", kind.as_str()),
    }
}
