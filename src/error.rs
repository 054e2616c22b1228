//! Error taxonomy for the request pipeline and the provider adapters.
//!
//! Transient errors (no response, timeout, 429, 5xx) are eligible for retry
//! per the request policy. Fatal errors (other client statuses, unparsable
//! payloads, empty result sets) are surfaced immediately and never retried.

/// A failure of one logical request, after all retry handling is done.
///
/// `Display` yields a short human-readable message suitable for a status line.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// No response at the transport level (connection refused, DNS, TLS, ...).
    Transport(String),
    /// No response within the per-request time budget.
    Timeout,
    /// HTTP 429.
    RateLimited,
    /// HTTP 5xx.
    Server(u16),
    /// Any other non-2xx status.
    Client(u16),
    /// A 2xx response whose body could not be interpreted.
    Parse(String),
    /// The service answered but had no result for the query.
    NotFound(String),
}

impl RequestError {
    /// Whether a retry could plausibly fix this failure.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RequestError::Transport(_)
                | RequestError::Timeout
                | RequestError::RateLimited
                | RequestError::Server(_)
        )
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Transport(reason) => write!(f, "{}", reason),
            RequestError::Timeout => write!(f, "Request timed out."),
            RequestError::RateLimited => write!(f, "Too many requests (HTTP 429)."),
            RequestError::Server(status) => write!(f, "Server error (HTTP {}).", status),
            RequestError::Client(status) => write!(f, "Request failed (HTTP {}).", status),
            RequestError::Parse(msg) => write!(f, "{}", msg),
            RequestError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(RequestError::Transport("Connection refused.".to_string()).is_transient());
        assert!(RequestError::Timeout.is_transient());
        assert!(RequestError::RateLimited.is_transient());
        assert!(RequestError::Server(503).is_transient());

        assert!(!RequestError::Client(404).is_transient());
        assert!(!RequestError::Parse("Geocoding parse error.".to_string()).is_transient());
        assert!(!RequestError::NotFound("Destination not found.".to_string()).is_transient());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(RequestError::Timeout.to_string(), "Request timed out.");
        assert_eq!(
            RequestError::Server(502).to_string(),
            "Server error (HTTP 502)."
        );
        assert_eq!(
            RequestError::Client(404).to_string(),
            "Request failed (HTTP 404)."
        );
        assert_eq!(
            RequestError::NotFound("No route found.".to_string()).to_string(),
            "No route found."
        );
    }
}
