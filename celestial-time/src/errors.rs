//! Error types for time-value rendering.
//!
//! Rendering is total for every [`Duration`](crate::Duration), so the only
//! failure modes are at the edges: a timestamp pattern that cannot be parsed,
//! and numeric input that does not fit a 64-bit millisecond count.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidPattern`](FormatError::InvalidPattern) | [`InstantFormatter::fmt`](crate::InstantFormatter::fmt) |
//! | [`OutOfRange`](FormatError::OutOfRange) | [`Duration::try_from_millis_f64`](crate::Duration::try_from_millis_f64) |

use thiserror::Error;

/// Unified error type for duration and instant rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The timestamp pattern contains an item chrono cannot format.
    #[error("Invalid timestamp pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Numeric input is not finite or does not fit in an `i64` millisecond count.
    #[error("Value out of range in {operation}: {message}")]
    OutOfRange { operation: String, message: String },
}

/// Convenience alias for `Result<T, FormatError>`.
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// Creates an [`InvalidPattern`](Self::InvalidPattern) error.
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(operation: &str, reason: &str) -> Self {
        Self::OutOfRange {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }
}
