//! Underlying pseudo-random generators
//!
//! [`DeterministicRng`](crate::DeterministicRng) never looks inside the
//! generator it wraps. It only needs the raw-draw interface in [`raw`] and the
//! guarantee that every raw draw advances the sequence by exactly one step.
//!
//! CRITICAL: Implementations must be deterministic across processes and
//! architectures. Same seed + same raw calls → same raw results.

mod raw;
mod xorshift;

pub use raw::RawGenerator;
pub use xorshift::XorShift64Star;
