//! Directions client error types.

/// Errors from the driving-directions client.
///
/// A failed leg is logged and skipped by the geometry builder; it never
/// cancels sibling legs or aborts a rebuild.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider found no drivable route between the endpoints
    #[error("no route found")]
    NoRoute,

    /// Provider returned an error status code
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(DirectionsError::NoRoute.to_string(), "no route found");

        let err = DirectionsError::Provider {
            status: 429,
            message: "slow down".into(),
        };
        assert_eq!(err.to_string(), "provider error 429: slow down");
    }
}
