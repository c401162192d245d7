//! Error types for data parsing in agricert-types.

use thiserror::Error;

/// Errors that can occur when parsing agricert data.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The string does not name one of the eight soil metrics.
    #[error("Unknown metric key: {0}")]
    UnknownMetric(String),
}

/// Result type alias using agricert-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
