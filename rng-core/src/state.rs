//! GeneratorState - the persisted position of a generator
//!
//! A state is two integers: the seed and the number of draws consumed since
//! seeding. It has no identity of its own; every snapshot is an independent
//! copy.
//!
//! # Wire formats
//!
//! Text (compact JSON, fixed key order):
//!
//! ```text
//! {"Seed":<int32>,"CallCount":<int32>}
//! ```
//!
//! Binary (8 bytes, little-endian, signed):
//!
//! ```text
//! bytes[0..4] = seed
//! bytes[4..8] = draw count
//! ```

use crate::error::{Result, RngError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{ErrorKind, Read, Write};
use std::str::FromStr;

/// Size of the binary encoding in bytes
pub const ENCODED_LEN: usize = 8;

/// Snapshot of a generator's sequence position
///
/// # Example
/// ```
/// use resumable_rng::GeneratorState;
///
/// let state = GeneratorState::new(7, 0);
/// assert_eq!(state.to_text(), r#"{"Seed":7,"CallCount":0}"#);
/// assert_eq!(GeneratorState::from_bytes(&state.to_bytes()).unwrap(), state);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorState {
    #[serde(rename = "Seed")]
    pub seed: i32,

    /// Raw draws consumed since seeding
    #[serde(rename = "CallCount")]
    pub draw_count: i32,
}

impl GeneratorState {
    pub fn new(seed: i32, draw_count: i32) -> Self {
        Self { seed, draw_count }
    }

    /// Canonical text encoding
    ///
    /// Identical states always produce byte-identical text.
    pub fn to_text(&self) -> String {
        tracing::trace!(seed = self.seed, draw_count = self.draw_count, "encoding state text");
        serde_json::to_string(self).expect("State serialization should not fail")
    }

    /// Parse the text encoding
    ///
    /// # Errors
    /// - `NullInput` if `text` is empty or only whitespace
    /// - `Format` if it is not an object with integer `Seed` and `CallCount`
    ///   fields that fit in 32 bits
    pub fn from_text(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(RngError::NullInput("text"));
        }

        let state: GeneratorState =
            serde_json::from_str(text).map_err(|e| RngError::Format(e.to_string()))?;

        tracing::trace!(seed = state.seed, draw_count = state.draw_count, "decoded state text");
        Ok(state)
    }

    /// Fixed 8-byte little-endian encoding
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[..4].copy_from_slice(&self.seed.to_le_bytes());
        out[4..].copy_from_slice(&self.draw_count.to_le_bytes());
        out
    }

    /// Decode the first 8 bytes of `bytes`; trailing bytes are ignored
    ///
    /// # Errors
    /// - `NullInput` if `bytes` is empty
    /// - `TruncatedData` if fewer than 8 bytes are present
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(RngError::NullInput("binary"));
        }
        let Some(head) = bytes.get(..ENCODED_LEN) else {
            return Err(RngError::TruncatedData {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            });
        };

        let mut seed = [0u8; 4];
        let mut draw_count = [0u8; 4];
        seed.copy_from_slice(&head[..4]);
        draw_count.copy_from_slice(&head[4..]);

        Ok(Self {
            seed: i32::from_le_bytes(seed),
            draw_count: i32::from_le_bytes(draw_count),
        })
    }

    /// Write the binary encoding to a caller-owned sink
    ///
    /// Performs one `write_all` of 8 bytes. The sink is borrowed, so it stays
    /// open and positioned right after the state.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        tracing::trace!(seed = self.seed, draw_count = self.draw_count, "writing state bytes");
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read the binary encoding from a caller-owned source
    ///
    /// Consumes at most 8 bytes and leaves the source open.
    ///
    /// # Errors
    /// - `NullInput` if the source is already at end of stream
    /// - `TruncatedData` if the stream ends inside the 8 bytes
    /// - `Io` for any other read failure
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; ENCODED_LEN];
        let mut filled = 0;

        while filled < ENCODED_LEN {
            match reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Self::from_bytes(&buf[..filled])
    }
}

impl fmt::Display for GeneratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for GeneratorState {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}
