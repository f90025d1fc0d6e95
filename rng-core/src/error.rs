//! Error taxonomy for generator construction, draws and state codecs
//!
//! Every error is raised at the boundary of the call that caused it. A failed
//! call never hands back a partially restored generator and never touches an
//! existing one.

use thiserror::Error;

/// Errors surfaced by [`DeterministicRng`](crate::DeterministicRng) and
/// [`GeneratorState`](crate::GeneratorState)
#[derive(Debug, Error)]
pub enum RngError {
    /// Bounded draw requested with a negative bound or an inverted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Restore requested with a position the generator cannot reach
    #[error("Invalid state: draw count {draw_count} is negative")]
    InvalidState { draw_count: i32 },

    /// Deserialization given no payload at all
    #[error("No {0} payload supplied")]
    NullInput(&'static str),

    /// Text payload is not a `{"Seed":<int32>,"CallCount":<int32>}` object
    #[error("Malformed state text: {0}")]
    Format(String),

    /// Binary payload shorter than the fixed 8-byte layout
    #[error("Truncated state data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// The caller's stream failed underneath a binary read or write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RngError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = RngError::InvalidState { draw_count: -1 };
        assert_eq!(err.to_string(), "Invalid state: draw count -1 is negative");

        let err = RngError::TruncatedData {
            expected: 8,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Truncated state data: expected 8 bytes, got 3"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RngError = io.into();
        assert!(matches!(err, RngError::Io(_)));
    }
}
