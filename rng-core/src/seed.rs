//! Seed sources for generators created without an explicit seed
//!
//! The "no seed supplied" path is an injectable capability rather than a
//! hidden global: callers pick a [`SeedSource`] and may record the seed it
//! produced via [`DeterministicRng::seed`](crate::DeterministicRng::seed).

use std::time::{SystemTime, UNIX_EPOCH};

/// Something that can hand out a starting seed
pub trait SeedSource {
    fn seed(&self) -> i32;
}

/// Coarse wall-clock seed
///
/// NOT reproducible: two runs get different seeds. Record the seed of the
/// resulting generator if the sequence needs to be replayed later.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSeed;

impl SeedSource for TimeSeed {
    fn seed(&self) -> i32 {
        // Clock before the epoch degrades to seed 0 rather than failing
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        millis as u32 as i32
    }
}

/// Always yields the same seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub i32);

impl SeedSource for FixedSeed {
    fn seed(&self) -> i32 {
        self.0
    }
}

impl<F> SeedSource for F
where
    F: Fn() -> i32,
{
    fn seed(&self) -> i32 {
        self()
    }
}
