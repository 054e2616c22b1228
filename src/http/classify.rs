//! Status-code classification for completed attempts.
//!
//! Transport-level failures and timeouts never reach this table; the
//! orchestrator treats them as transient before a status exists.

use crate::error::RequestError;

/// What a completed attempt means for the retry state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// 2xx with a body: the logical request is done.
    Success,
    /// Worth retrying if the policy allows it (429, 5xx).
    Transient,
    /// Retrying cannot help (any other non-2xx).
    Fatal,
}

/// Classify an HTTP status code. Rules, in order: 2xx is success, 429 and
/// 5xx are transient, everything else (404 included) is fatal.
pub fn classify(status: u16) -> Disposition {
    match status {
        200..=299 => Disposition::Success,
        429 => Disposition::Transient,
        500..=599 => Disposition::Transient,
        _ => Disposition::Fatal,
    }
}

/// The error a non-2xx status resolves to when it becomes final.
pub fn status_error(status: u16) -> RequestError {
    match status {
        429 => RequestError::RateLimited,
        500..=599 => RequestError::Server(status),
        _ => RequestError::Client(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2xx_is_success() {
        assert_eq!(classify(200), Disposition::Success);
        assert_eq!(classify(204), Disposition::Success);
        assert_eq!(classify(299), Disposition::Success);
    }

    #[test]
    fn test_429_and_5xx_are_transient() {
        assert_eq!(classify(429), Disposition::Transient);
        assert_eq!(classify(500), Disposition::Transient);
        assert_eq!(classify(503), Disposition::Transient);
        assert_eq!(classify(599), Disposition::Transient);
    }

    #[test]
    fn test_other_statuses_are_fatal() {
        assert_eq!(classify(301), Disposition::Fatal);
        assert_eq!(classify(400), Disposition::Fatal);
        assert_eq!(classify(401), Disposition::Fatal);
        assert_eq!(classify(404), Disposition::Fatal);
        assert_eq!(classify(418), Disposition::Fatal);
    }

    #[test]
    fn test_status_error_mapping() {
        assert_eq!(status_error(429), RequestError::RateLimited);
        assert_eq!(status_error(503), RequestError::Server(503));
        assert_eq!(status_error(404), RequestError::Client(404));
    }
}
