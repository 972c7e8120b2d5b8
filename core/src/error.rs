//! Error types for the score API client.
//!
//! # Design
//! A non-200 response becomes `Api` when the server explained itself with a
//! non-empty `{"error": ...}` body, and `Status` otherwise. Transport and
//! decode failures are passed through unchanged so their messages reach the
//! caller verbatim.

/// Errors returned by `ScoreClient` operations. Every variant is terminal.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// The request could not be built or sent, or the body could not be read.
    #[error(transparent)]
    Transport(#[from] ureq::Error),

    /// The server returned a non-200 status with an error description.
    #[error("API error: {0}")]
    Api(String),

    /// The server returned a non-200 status without a usable description.
    #[error("Received http code: {0}")]
    Status(u16),

    /// A 200 response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
