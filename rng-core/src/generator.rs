//! Resumable deterministic generator
//!
//! Wraps a [`RawGenerator`] and counts every draw taken from it. The pair
//! `(seed, draw_count)` is all that needs to be persisted: restoring re-seeds
//! a fresh generator and replays `draw_count` raw draws, discarding them.
//!
//! # Critical Invariants
//!
//! - **Position**: the wrapped generator is always exactly `draw_count` steps
//!   past a fresh `from_seed(seed)`, after construction, every draw and every
//!   restore.
//! - **Shared counter**: all draw methods advance the same counter by one, so
//!   the counter tracks draws, not draws per method.
//! - **No partial failure**: a rejected draw does not advance, and a rejected
//!   restore returns no generator.
//!
//! Restore is O(draw_count). Internal generator state is never serialized;
//! replay is what makes a saved state portable across processes and machines.

use crate::error::{Result, RngError};
use crate::rng::{RawGenerator, XorShift64Star};
use crate::seed::{SeedSource, TimeSeed};
use crate::state::{GeneratorState, ENCODED_LEN};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Resumable generator over the default xorshift64* sequence
///
/// # Example
/// ```
/// use resumable_rng::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// rng.next_int_below(100).unwrap();
///
/// let saved = rng.to_text();
/// let mut resumed = DeterministicRng::from_text(&saved).unwrap();
/// assert_eq!(resumed.next_float(), rng.next_float());
/// ```
pub type DeterministicRng = ResumableRng<XorShift64Star>;

/// Draw-counting wrapper around any [`RawGenerator`]
///
/// Not safe for concurrent mutation; use one instance per thread or guard it
/// with a lock.
#[derive(Debug, Clone)]
pub struct ResumableRng<G: RawGenerator> {
    state: GeneratorState,
    inner: G,
}

impl<G: RawGenerator> ResumableRng<G> {
    /// Create a generator at the start of `seed`'s sequence
    pub fn new(seed: i32) -> Self {
        Self {
            state: GeneratorState::new(seed, 0),
            inner: G::from_seed(seed),
        }
    }

    /// Create a generator seeded from the wall clock
    ///
    /// NOT reproducible across runs. Read [`seed`](Self::seed) afterwards if
    /// the sequence must be replayed.
    pub fn from_entropy() -> Self {
        let rng = Self::from_seed_source(&TimeSeed);
        warn!(seed = rng.seed(), "generator seeded from clock; sequence is not reproducible");
        rng
    }

    /// Create a generator seeded by `source`
    pub fn from_seed_source<S: SeedSource + ?Sized>(source: &S) -> Self {
        Self::new(source.seed())
    }

    /// Rebuild a generator at position `draw_count` of `seed`'s sequence
    ///
    /// # Errors
    /// `InvalidState` if `draw_count` is negative.
    pub fn restore(seed: i32, draw_count: i32) -> Result<Self> {
        if draw_count < 0 {
            return Err(RngError::InvalidState { draw_count });
        }

        debug!(seed, draw_count, "restoring generator by replay");

        let mut inner = G::from_seed(seed);
        for _ in 0..draw_count {
            inner.next_raw_int();
        }

        Ok(Self {
            state: GeneratorState::new(seed, draw_count),
            inner,
        })
    }

    pub fn from_state(state: GeneratorState) -> Result<Self> {
        Self::restore(state.seed, state.draw_count)
    }

    /// Restore from the `{"Seed":..,"CallCount":..}` text encoding
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_state(GeneratorState::from_text(text)?)
    }

    /// Restore from the 8-byte binary encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_state(GeneratorState::from_bytes(bytes)?)
    }

    /// Restore from a caller-owned stream, reading at most 8 bytes
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        Self::from_state(GeneratorState::read_from(reader)?)
    }

    /// Count one draw and hand out the generator that produces it
    ///
    /// Every draw method goes through here, so the counter and the wrapped
    /// generator cannot drift apart.
    fn advance(&mut self) -> &mut G {
        assert!(
            self.state.draw_count < i32::MAX,
            "draw counter exhausted at {} draws",
            i32::MAX
        );
        self.state.draw_count += 1;
        &mut self.inner
    }

    /// Non-negative value in `[0, i32::MAX)`
    ///
    /// # Panics
    /// If the generator has already produced `i32::MAX` draws.
    pub fn next_int(&mut self) -> i32 {
        self.advance().next_raw_int()
    }

    /// Value in `[0, bound)`; `bound == 0` yields 0 and still counts as a draw
    ///
    /// # Errors
    /// `InvalidArgument` if `bound` is negative. The generator does not advance.
    ///
    /// # Panics
    /// If the generator has already produced `i32::MAX` draws.
    pub fn next_int_below(&mut self, bound: i32) -> Result<i32> {
        if bound < 0 {
            return Err(RngError::InvalidArgument(format!(
                "bound must be non-negative, got {}",
                bound
            )));
        }
        Ok(self.advance().next_raw_below(bound))
    }

    /// Value in `[low, high)`; `low == high` yields `low` and still counts
    ///
    /// # Errors
    /// `InvalidArgument` if `high < low`. The generator does not advance.
    ///
    /// # Panics
    /// If the generator has already produced `i32::MAX` draws.
    pub fn next_int_between(&mut self, low: i32, high: i32) -> Result<i32> {
        if high < low {
            return Err(RngError::InvalidArgument(format!(
                "high ({}) must not be less than low ({})",
                high, low
            )));
        }
        Ok(self.advance().next_raw_between(low, high))
    }

    /// Value in `[0.0, 1.0)`
    ///
    /// # Panics
    /// If the generator has already produced `i32::MAX` draws.
    pub fn next_float(&mut self) -> f64 {
        self.advance().next_raw_float()
    }

    /// Fair coin flip (one draw)
    pub fn next_bool(&mut self) -> bool {
        self.next_float() < 0.5
    }

    /// `true` with probability `p`, clamped into `[0, 1]` (one draw)
    pub fn next_chance(&mut self, p: f64) -> bool {
        self.next_float() < p.clamp(0.0, 1.0)
    }

    pub fn seed(&self) -> i32 {
        self.state.seed
    }

    pub fn draw_count(&self) -> i32 {
        self.state.draw_count
    }

    /// Snapshot of the current position
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn to_text(&self) -> String {
        self.state.to_text()
    }

    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        self.state.to_bytes()
    }

    /// Write the 8-byte encoding to a caller-owned stream, leaving it open
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.state.write_to(writer)
    }
}

/// Two generators are equal when they sit at the same position of the same
/// sequence
impl<G: RawGenerator> PartialEq for ResumableRng<G> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<G: RawGenerator> Eq for ResumableRng<G> {}

impl<G: RawGenerator> Serialize for ResumableRng<G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.state.serialize(serializer)
    }
}

impl<'de, G: RawGenerator> Deserialize<'de> for ResumableRng<G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let state = GeneratorState::deserialize(deserializer)?;
        Self::from_state(state).map_err(D::Error::custom)
    }
}
