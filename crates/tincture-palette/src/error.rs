//! Error types for the palette crate.

use thiserror::Error;

/// Errors that can occur when parsing a base color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value does not start with `#`.
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The value has the wrong number of hex digits.
    #[error("color '{value}' must have exactly 6 hex digits, got {digits}")]
    InvalidLength { value: String, digits: usize },

    /// A character after the `#` is not a hex digit.
    #[error("color '{value}' contains invalid hex digit '{found}'")]
    InvalidDigit { value: String, found: char },
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, ColorError>;
