//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG used as the default sequence source.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//! The 32-bit seed is spread over the 64-bit state with a splitmix64
//! finalizer so that small neighbouring seeds start far apart.
//!
//! # One step per draw
//!
//! Every public draw consumes exactly one `next_u64` step. Bounded draws use a
//! multiply-shift reduction of the high 32 bits instead of a rejection loop,
//! so the step count never depends on the values produced.

use super::RawGenerator;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use resumable_rng::rng::{RawGenerator, XorShift64Star};
///
/// let mut rng = XorShift64Star::from_seed(12345);
/// let value = rng.next_raw_below(100); // [0, 100)
/// assert!((0..100).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64Star {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl XorShift64Star {
    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// One step reduced into `[0, span)`; `span` must fit in 32 bits
    fn next_scaled(&mut self, span: u64) -> u64 {
        debug_assert!(span <= u32::MAX as u64);
        ((self.next_u64() >> 32) * span) >> 32
    }
}

/// splitmix64 finalizer
fn mix_seed(seed: i32) -> u64 {
    let mut z = (seed as u32 as u64).wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

impl RawGenerator for XorShift64Star {
    fn from_seed(seed: i32) -> Self {
        let mixed = mix_seed(seed);
        // xorshift requirement
        let state = if mixed == 0 { 1 } else { mixed };
        Self { state }
    }

    fn next_raw_int(&mut self) -> i32 {
        self.next_scaled(i32::MAX as u64) as i32
    }

    fn next_raw_float(&mut self) -> f64 {
        // Convert to [0.0, 1.0) by dividing by 2^53
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    fn next_raw_below(&mut self, bound: i32) -> i32 {
        self.next_scaled(bound.max(0) as u64) as i32
    }

    fn next_raw_between(&mut self, low: i32, high: i32) -> i32 {
        let span = (high as i64 - low as i64).max(0) as u64;
        (low as i64 + self.next_scaled(span) as i64) as i32
    }
}
