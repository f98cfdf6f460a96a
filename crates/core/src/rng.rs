//! RNG module - random piece generation
//!
//! Pieces are drawn uniformly from [`PIECE_KINDS`] using a small LCG, and
//! numbered by a counter the generator owns. There is no process-wide state:
//! two generators built from the same seed produce identical sequences.

use crate::types::{Piece, PieceKind, PIECE_KINDS};

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
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Produces new pieces with a random kind and the next sequence id.
///
/// Ids are `u64` and only ever count up, so they are never reused within a run.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
    next_id: u64,
}

impl PieceGenerator {
    /// Create a generator with the given seed. Ids start at 0.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            next_id: 0,
        }
    }

    /// Generate the next piece, advancing the id counter.
    pub fn generate(&mut self) -> Piece {
        let kind = self.next_kind();
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;
        piece
    }

    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PIECE_KINDS.len() as u32) as usize;
        PIECE_KINDS[idx]
    }

    /// Id the next generated piece will carry (= pieces generated so far).
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Seed this generator was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
        // max=0 is treated as 1 instead of dividing by zero.
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_generator_ids_start_at_zero_and_increase() {
        let mut gen = PieceGenerator::new(99);
        for expected in 0..20 {
            assert_eq!(gen.generate().sequence_id, expected);
        }
        assert_eq!(gen.next_id(), 20);
    }

    #[test]
    fn test_generator_ids_continue_past_u32_range() {
        let mut gen = PieceGenerator::new(3);
        gen.next_id = u64::from(u32::MAX);
        assert_eq!(gen.generate().sequence_id, u64::from(u32::MAX));
        assert_eq!(gen.generate().sequence_id, u64::from(u32::MAX) + 1);
        assert_eq!(gen.next_id(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_generator_same_seed_same_pieces() {
        let mut a = PieceGenerator::new(2024);
        let mut b = PieceGenerator::new(2024);
        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_generator_produces_every_kind() {
        let mut gen = PieceGenerator::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let kind = gen.generate().kind;
            let idx = PIECE_KINDS.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "kinds seen: {:?}", seen);
    }
}
