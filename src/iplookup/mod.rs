//! IP-based geolocation: a sequential fallback chain over providers with
//! differing JSON schemas. The first provider yielding two parseable
//! coordinates wins; this is ordered traversal, not a retry of one endpoint.

use log::{debug, warn};
use serde_json::Value;

use crate::config::{IpProvider, RequestPolicy};
use crate::domain::Coordinate;
use crate::error::RequestError;
use crate::http::{RequestOrchestrator, Transport};

/// Walk the provider chain in order. Each individual request still gets the
/// orchestrator's timeout/retry handling; a provider that fails or serves an
/// unusable body just moves the chain along.
#[tracing::instrument(skip(orchestrator, providers, headers, policy))]
pub async fn lookup<T: Transport>(
    orchestrator: &RequestOrchestrator<T>,
    providers: &[IpProvider],
    headers: &[(String, String)],
    policy: &RequestPolicy,
) -> Result<Coordinate, RequestError> {
    for provider in providers {
        match orchestrator.execute(&provider.url, headers, policy).await {
            Ok(body) => {
                if let Some(coord) =
                    parse_provider(&body, &provider.lat_field, &provider.lon_field)
                {
                    debug!("IP lookup resolved via {}", provider.url);
                    return Ok(coord);
                }
                debug!(
                    "IP provider {} had no usable {}/{} fields, trying next",
                    provider.url, provider.lat_field, provider.lon_field
                );
            }
            Err(err) => {
                warn!("IP provider {} failed ({}), trying next", provider.url, err);
            }
        }
    }

    Err(RequestError::NotFound(
        "Could not determine location.".to_string(),
    ))
}

/// Extract a coordinate from one provider's JSON object using its field
/// names. Returns None when fields are absent, non-numeric, or out of range.
pub fn parse_provider(body: &str, lat_field: &str, lon_field: &str) -> Option<Coordinate> {
    let value: Value = serde_json::from_str(body).ok()?;
    Coordinate::from_json(value.get(lat_field), value.get(lon_field))
}
