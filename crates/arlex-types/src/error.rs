//! Error types for parsing in arlex-types.

use thiserror::Error;

/// Errors produced when parsing operator input into window bounds.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WindowParseError {
    /// The input matched neither accepted date-time format.
    #[error("invalid date/time '{0}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidInstant(String),
}
