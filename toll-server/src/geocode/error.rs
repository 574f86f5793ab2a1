//! Geocoding client error types.

/// Errors from the place-search HTTP client.
///
/// Callers of the search flow treat any of these as "no results": address
/// search degrades to an empty list rather than surfacing a failure.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider returned an error status code
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::Provider {
            status: 503,
            message: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "provider error 503: overloaded");

        let err = GeocodeError::Json {
            message: "expected array".into(),
            body: None,
        };
        assert!(err.to_string().contains("expected array"));
    }
}
