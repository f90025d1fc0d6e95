//! Raw-draw interface consumed by the resumable wrapper

use std::fmt::Debug;

/// A seedable generator exposing one-step raw draws
///
/// # Contract
///
/// Every draw method advances the generator by exactly ONE step, including
/// the degenerate cases (`bound == 0`, `low == high`). Replay relies on this:
/// restoring a position only calls [`next_raw_int`](Self::next_raw_int)
/// `draw_count` times, whatever mix of methods produced the original history.
///
/// Argument validation belongs to the caller. Implementations may assume
/// `bound >= 0` and `low <= high`.
pub trait RawGenerator: Clone + Debug {
    /// Build a generator positioned at the start of `seed`'s sequence
    fn from_seed(seed: i32) -> Self;

    /// Non-negative value in `[0, i32::MAX)`
    fn next_raw_int(&mut self) -> i32;

    /// Value in `[0.0, 1.0)`
    fn next_raw_float(&mut self) -> f64;

    /// Value in `[0, bound)`, or 0 when `bound == 0`
    fn next_raw_below(&mut self, bound: i32) -> i32;

    /// Value in `[low, high)`, or `low` when `low == high`
    fn next_raw_between(&mut self, low: i32, high: i32) -> i32;
}
