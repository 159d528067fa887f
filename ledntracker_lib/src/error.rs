//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding serialization, CSV, and input validation failures.
#[derive(Debug)]
pub enum LednTrackerError {
    /// An error from the underlying API client.
    Api(ledntoken_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// Writing CSV output failed.
    Csv(csv::Error),
    /// Flushing output failed.
    Io(std::io::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for LednTrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for LednTrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<ledntoken_api::Error> for LednTrackerError {
    fn from(e: ledntoken_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for LednTrackerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<csv::Error> for LednTrackerError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<std::io::Error> for LednTrackerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
