//! Toll client error types.

/// Errors from the toll pricing HTTP client.
///
/// Note that a non-200 provider response is *not* an error: the client
/// degrades it to a zero-amount estimate. These variants cover transport
/// and decoding failures, which the aggregator treats as a skipped leg.
#[derive(Debug, thiserror::Error)]
pub enum TollError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API key could not be used as a header value
    #[error("invalid API key format")]
    InvalidApiKey,
}
