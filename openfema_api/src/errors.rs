//! Error types for the OpenFEMA client.

/// Errors that can occur when fetching disaster declarations.
///
/// Transport failures, bad statuses, and undecodable bodies are distinct
/// variants so callers can tell a network problem from a response that did
/// not match the expected envelope shape.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (connection refused, timeout,
    /// DNS failure, or an unreadable response body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON for the expected envelope.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}
