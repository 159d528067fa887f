//! Error types for the API client.

/// Errors that can occur when fetching account pages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or bad URL).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a JSON array of accounts.
    #[error("Failed to parse response body")]
    InvalidBody,
}
