//! The retry/timeout/backoff state machine around a single logical request.

use std::time::Duration;

use log::{debug, warn};

use super::classify::{Disposition, classify, status_error};
use super::transport::Transport;
use crate::config::RequestPolicy;
use crate::error::RequestError;

/// Drives one logical GET through the transport: races each attempt against
/// a timeout, classifies the outcome, and retries transient failures with a
/// fixed backoff. Produces exactly one final result per call.
///
/// Attempts are strictly sequential: at most one transport call is in flight
/// per logical request, and a timed-out call is aborted (its future dropped)
/// before the next attempt starts.
pub struct RequestOrchestrator<T: Transport> {
    transport: T,
}

impl<T: Transport> RequestOrchestrator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute a GET under the given policy, returning the response body of
    /// the first successful attempt or the last attempt's error.
    #[tracing::instrument(skip(self, headers, policy))]
    pub async fn execute(
        &self,
        url: &str,
        headers: &[(String, String)],
        policy: &RequestPolicy,
    ) -> Result<String, RequestError> {
        let retries = if policy.retry_enabled {
            policy.max_retries
        } else {
            0
        };
        let mut attempts_remaining = 1 + retries;
        let mut attempt = 0u32;

        loop {
            let error = match self.attempt(url, headers, policy.timeout).await {
                Ok(body) => return Ok(body),
                Err(e) => e,
            };
            attempts_remaining -= 1;

            if !error.is_transient() {
                debug!("GET {}: fatal error, not retrying: {}", url, error);
                return Err(error);
            }
            if attempts_remaining == 0 {
                debug!("GET {}: giving up after attempt {}: {}", url, attempt + 1, error);
                return Err(error);
            }

            warn!(
                "GET {}: attempt {} failed ({}), retrying in {}ms...",
                url,
                attempt + 1,
                error,
                policy.backoff.as_millis()
            );
            tokio::time::sleep(policy.backoff).await;
            attempt += 1;
        }
    }

    /// One attempt: the transport call racing a timeout. Whichever resolves
    /// first wins; on timeout the transport future is dropped, which aborts
    /// the underlying call, and a late completion is never observed.
    async fn attempt(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<String, RequestError> {
        let budget = timeout.max(Duration::from_millis(1));

        let response = match tokio::time::timeout(budget, self.transport.get(url, headers)).await {
            Err(_elapsed) => return Err(RequestError::Timeout),
            Ok(Err(failure)) => return Err(RequestError::Transport(failure.reason)),
            Ok(Ok(response)) => response,
        };

        match classify(response.status) {
            Disposition::Success => Ok(response.body),
            Disposition::Transient | Disposition::Fatal => Err(status_error(response.status)),
        }
    }
}
