//! Request policies, service endpoints, and the polite User-Agent.
//!
//! Settings are assembled in code; loading them from disk is the embedding
//! application's concern. Defaults match the public OSM service stack:
//! Nominatim for geocoding, the OSRM demo server for routing, and two IP
//! geolocation endpoints as a fallback chain.

use std::time::Duration;

/// Application name used in the User-Agent header.
pub const APP_NAME: &str = "georoute";

/// Timeout/retry/backoff budget for one logical request.
/// Fixed for the lifetime of a request; may differ per request kind.
#[derive(Debug, Clone)]
pub struct RequestPolicy {
    /// Per-attempt time budget. Clamped to at least 1 ms when armed.
    pub timeout: Duration,
    /// When false, a transient failure is final after the first attempt
    /// regardless of `max_retries`.
    pub retry_enabled: bool,
    /// Extra attempts after the first one.
    pub max_retries: u32,
    /// Fixed delay before each retry.
    pub backoff: Duration,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(10_000),
            retry_enabled: true,
            max_retries: 1,
            backoff: Duration::from_millis(600),
        }
    }
}

/// One IP geolocation endpoint and the field names its schema uses.
#[derive(Debug, Clone)]
pub struct IpProvider {
    pub url: String,
    pub lat_field: String,
    pub lon_field: String,
}

impl IpProvider {
    pub fn new(url: &str, lat_field: &str, lon_field: &str) -> Self {
        Self {
            url: url.to_string(),
            lat_field: lat_field.to_string(),
            lon_field: lon_field.to_string(),
        }
    }
}

/// Base URLs of the external services.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub geocode_base: String,
    pub route_base: String,
    /// Tried in order; the first provider with parseable coordinates wins.
    pub ip_providers: Vec<IpProvider>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocode_base: "https://nominatim.openstreetmap.org".to_string(),
            route_base: "https://router.project-osrm.org".to_string(),
            ip_providers: vec![
                IpProvider::new("https://ipapi.co/json/", "latitude", "longitude"),
                IpProvider::new("http://ip-api.com/json/", "lat", "lon"),
            ],
        }
    }
}

/// Everything a [`crate::client::RoutingClient`] needs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub user_agent: String,
    pub geocode: RequestPolicy,
    pub route: RequestPolicy,
    pub lookup: RequestPolicy,
    pub endpoints: Endpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: user_agent("you@example.com"),
            geocode: RequestPolicy::default(),
            route: RequestPolicy {
                timeout: Duration::from_millis(15_000),
                ..RequestPolicy::default()
            },
            lookup: RequestPolicy::default(),
            endpoints: Endpoints::default(),
        }
    }
}

/// Build a polite User-Agent for external services.
/// Nominatim's usage policy requires an identifying UA with contact info.
pub fn user_agent(contact_email: &str) -> String {
    let email = contact_email.trim();
    let email = if email.is_empty() { "you@example.com" } else { email };
    format!(
        "{}/{} (+contact: {})",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        email
    )
}
