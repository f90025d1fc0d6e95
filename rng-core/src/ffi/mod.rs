//! PyO3 bindings
//!
//! Exposes the generator to Python so host tooling can drive and persist
//! the same sequences as the Rust side.

pub mod generator;
