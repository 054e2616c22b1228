//! The caller-facing facade: geocode, route, and IP lookup, each one
//! logical request resolving exactly once.

use log::debug;
use reqwest::Client;

use crate::config::Settings;
use crate::domain::{Coordinate, RouteResult};
use crate::error::RequestError;
use crate::http::{ReqwestTransport, RequestOrchestrator, Transport};
use crate::{geocode, iplookup, route, simplify};

/// Async client for forward geocoding, driving routes, and IP-based
/// location. Each operation runs under its own request policy; unrelated
/// calls may be in flight concurrently.
pub struct RoutingClient<T: Transport> {
    orchestrator: RequestOrchestrator<T>,
    settings: Settings,
}

impl RoutingClient<ReqwestTransport> {
    /// Build a client with the production reqwest transport.
    pub fn new(settings: Settings) -> Result<Self, RequestError> {
        let client = Client::builder()
            .build()
            .map_err(|e| RequestError::Transport(format!("Failed to set up HTTP client: {}", e)))?;
        Ok(Self::with_transport(ReqwestTransport::new(client), settings))
    }
}

impl<T: Transport> RoutingClient<T> {
    /// Build a client over an injected transport.
    pub fn with_transport(transport: T, settings: Settings) -> Self {
        Self {
            orchestrator: RequestOrchestrator::new(transport),
            settings,
        }
    }

    /// Resolve free text to a coordinate via the geocoding service.
    /// Empty input short-circuits without a network call.
    #[tracing::instrument(skip(self))]
    pub async fn geocode(&self, text: &str) -> Result<Coordinate, RequestError> {
        let query = text.trim();
        if query.is_empty() {
            return Err(RequestError::NotFound("Destination not found.".to_string()));
        }

        let url = geocode::geocode_url(&self.settings.endpoints.geocode_base, query)?;
        let body = self
            .orchestrator
            .execute(&url, &self.headers(), &self.settings.geocode)
            .await?;
        geocode::parse_geocode(&body)
    }

    /// Request a driving route and simplify its path with a tolerance picked
    /// from the total route distance.
    #[tracing::instrument(skip(self))]
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteResult, RequestError> {
        let url = route::route_url(&self.settings.endpoints.route_base, origin, destination);
        let body = self
            .orchestrator
            .execute(&url, &self.headers(), &self.settings.route)
            .await?;
        let parsed = route::parse_route(&body)?;

        let tolerance = simplify::tolerance_for(parsed.distance_m);
        let path = simplify::simplify(&parsed.path, tolerance);
        debug!(
            "route simplified from {} to {} points (tolerance {}\u{b0})",
            parsed.path.len(),
            path.len(),
            tolerance
        );

        Ok(RouteResult { path, ..parsed })
    }

    /// Approximate the current location from the public IP address by
    /// walking the configured provider chain.
    #[tracing::instrument(skip(self))]
    pub async fn ip_lookup(&self) -> Result<Coordinate, RequestError> {
        iplookup::lookup(
            &self.orchestrator,
            &self.settings.endpoints.ip_providers,
            &self.headers(),
            &self.settings.lookup,
        )
        .await
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("User-Agent".to_string(), self.settings.user_agent.clone()),
            ("Accept".to_string(), "application/json".to_string()),
        ]
    }
}
