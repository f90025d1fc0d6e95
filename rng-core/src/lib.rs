//! Resumable RNG - Rust Engine
//!
//! Deterministic pseudo-random number generator whose position can be saved,
//! reloaded in another process, and continued bit-for-bit.
//!
//! # Architecture
//!
//! - **rng**: Underlying generators (raw-draw interface + xorshift64*)
//! - **generator**: Draw-counting wrapper with replay-based restore
//! - **state**: Persisted `(seed, draw_count)` and its text/binary codecs
//! - **seed**: Injectable seed sources for unseeded construction
//! - **config**: Serde construction config
//!
//! # Critical Invariants
//!
//! 1. Same seed + same draw calls → same values
//! 2. All draw methods share one counter
//! 3. `restore(state())` continues exactly where the original left off

// Module declarations
pub mod config;
pub mod error;
pub mod generator;
pub mod rng;
pub mod seed;
pub mod state;

// Re-exports for convenience
pub use config::RngConfig;
pub use error::{Result, RngError};
pub use generator::{DeterministicRng, ResumableRng};
pub use rng::{RawGenerator, XorShift64Star};
pub use seed::{FixedSeed, SeedSource, TimeSeed};
pub use state::{GeneratorState, ENCODED_LEN};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn resumable_rng(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyDeterministicRng>()?;
    Ok(())
}
