//! Error types for the client helpers.

/// Errors that can occur when calling the latency API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
