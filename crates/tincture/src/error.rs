//! Error types for the theme controller and its capabilities.
//!
//! Controller operations never return these to the host page: they are
//! logged and the affected step is skipped. Capabilities and configuration
//! loading do return them, so embedders can tell what went wrong.

use thiserror::Error;
use tincture_palette::ColorError;

/// Errors raised by capabilities and configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Persistent storage is unavailable or rejected an operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// A style property could not be written.
    #[error("style error: {0}")]
    Style(String),

    /// An outbound signal could not be delivered.
    #[error("signal error: {0}")]
    Signal(String),

    /// An event payload could not be decoded.
    #[error("invalid payload for '{event}': {message}")]
    Payload { event: String, message: String },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// A base color was malformed.
    #[error(transparent)]
    Color(#[from] ColorError),
}

impl ThemeError {
    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a style error.
    pub fn style(msg: impl Into<String>) -> Self {
        Self::Style(msg.into())
    }

    /// Create a signal error.
    pub fn signal(msg: impl Into<String>) -> Self {
        Self::Signal(msg.into())
    }

    /// Create a payload error.
    pub fn payload(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Payload {
            event: event.into(),
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Config(err.to_string())
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
