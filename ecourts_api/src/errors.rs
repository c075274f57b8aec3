//! Error types for the portal transport.

/// Errors that can occur when talking to the portal.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// The portal returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The base URL and endpoint path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
