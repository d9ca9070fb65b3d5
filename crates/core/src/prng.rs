//! Seedable PRNG for particle spawning and decorative jitter.
//!
//! Xorshift64 with the standard (13, 7, 17) shifts: fast, deterministic
//! across platforms, and good enough for scattering a population. Same seed,
//! same simulation.

use serde::{Deserialize, Serialize};

/// Deterministic Xorshift64 generator.
///
/// A seed of 0 is the algorithm's fixed point and is replaced with a
/// non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Replacement for the all-zeros seed (the golden-ratio gamma).
    const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a generator from a seed, substituting the fallback for 0.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// A uniformly distributed f64 in [0, 1), using the top 53 bits for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// A uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
