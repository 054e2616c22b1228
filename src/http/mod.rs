//! Resilient HTTP request pipeline: injected transport, response
//! classification, and the retrying request orchestrator.

mod classify;
mod orchestrator;
mod transport;

pub use classify::{Disposition, classify, status_error};
pub use orchestrator::RequestOrchestrator;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};

#[cfg(test)]
pub use transport::MockTransport;
