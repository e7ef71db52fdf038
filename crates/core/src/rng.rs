//! RNG module - deterministic piece source
//!
//! Pieces are drawn uniformly from the seven kinds. The generator is a small LCG so
//! that a seed fully determines a game, which keeps auto-play runs reproducible.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle
    /// quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Uniform piece generator with one-piece lookahead
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rng: SimpleRng,
    drawn: u32,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            drawn: 0,
        }
    }

    /// Peek at the next piece without consuming it
    pub fn peek(&self) -> PieceKind {
        let mut preview = self.rng.clone();
        Self::pick(&mut preview)
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        self.drawn += 1;
        Self::pick(&mut self.rng)
    }

    /// Pieces drawn so far
    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    fn pick(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
