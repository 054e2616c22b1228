//! Injected async transport: one HTTP GET per call, no policy of its own.

use async_trait::async_trait;
use reqwest::Client;

/// A completed HTTP exchange as seen by the pipeline: status and raw body.
/// Non-2xx statuses are reported here, not turned into errors; the
/// classifier decides what they mean.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// A transport-level failure: no response was obtained at all.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub reason: String,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for TransportError {}

/// Performs a single async HTTP GET. The orchestrator owns timeout and
/// retry; an implementation must not retry or time out on its own, and must
/// be safe for concurrent independent calls. Dropping the returned future
/// aborts the underlying call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(friendly_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(friendly_error)?;

        Ok(TransportResponse { status, body })
    }
}

/// Map common reqwest failures to short user-facing messages.
fn friendly_error(error: reqwest::Error) -> TransportError {
    let reason = if error.is_connect() {
        "Connection failed.".to_string()
    } else if error.is_timeout() {
        "Network timeout.".to_string()
    } else if error.is_request() {
        "Invalid request.".to_string()
    } else {
        "Network error.".to_string()
    };
    TransportError { reason }
}
