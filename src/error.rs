use thiserror::Error;

/// Transport-level failures raised by a [`crate::transport::Transport`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid HTTP method '{0}'")]
    InvalidMethod(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Errors surfaced by the scraper and its configuration
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request to `url` never produced a response
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Raised only by the caller-level success gate, never during extraction
    #[error("request to {url} did not succeed (status: {})", display_status(.status))]
    HttpStatus { url: String, status: Option<i32> },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_includes_url_and_code() {
        let err = ScrapeError::HttpStatus {
            url: "https://example.com".to_string(),
            status: Some(404),
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.com did not succeed (status: 404)"
        );

        let err = ScrapeError::HttpStatus {
            url: "fakeurl".to_string(),
            status: None,
        };
        assert!(err.to_string().contains("no response"));
    }

    #[test]
    fn test_fetch_message_includes_transport_cause() {
        let err = ScrapeError::Fetch {
            url: "https://example.com".to_string(),
            source: TransportError::Network("connection refused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.com failed: network error: connection refused"
        );
    }
}
