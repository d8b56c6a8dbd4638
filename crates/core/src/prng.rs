//! Seedable PRNG based on the Xorshift64 algorithm.
//!
//! Seed placement draws every coordinate from one [`Xorshift64`]. The same
//! seed always produces the same sequence on every platform, so a recorded
//! seed is enough to regenerate an image. [`Xorshift64::entropy_seed`] draws
//! a seed from the platform RNG for one-off runs.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Draws a fresh seed from the platform entropy source.
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Uses modulo reduction; the bias is negligible at 64-bit state width.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() % max as u64) as usize
    }
}
