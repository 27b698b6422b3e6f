//! RNG module - deterministic piece selection
//!
//! New pieces are drawn uniformly: a random kind and a random rotation state.
//! The generator is a small LCG so the same seed always replays the same game.

use crate::types::{PieceKind, Rotation};

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are the well-mixed ones.
        (self.next_u32() >> 16) % max
    }

    /// Draw a random piece kind and rotation state
    pub fn next_piece(&mut self) -> (PieceKind, Rotation) {
        let kind = PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize];
        let rotation = Rotation::ALL[self.next_range(Rotation::ALL.len() as u32) as usize];
        (kind, rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn test_next_piece_covers_every_kind() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let (kind, _) = rng.next_piece();
            seen[kind.index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen: {:?}", seen);
    }
}
