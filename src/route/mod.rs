//! Driving routes against an OSRM-style endpoint.
//!
//! OSRM serves GeoJSON geometry as `[longitude, latitude]` pairs; everything
//! downstream works in (latitude, longitude), so parsing swaps the axes.

use crate::domain::{Coordinate, RouteResult};
use crate::error::RequestError;

/// OSRM response shapes (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct RouteResponse {
        #[serde(default)]
        pub routes: Vec<Route>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Route {
        pub geometry: Geometry,
        #[serde(default)]
        pub distance: f64,
        #[serde(default)]
        pub duration: f64,
    }

    #[derive(Deserialize, Debug)]
    pub struct Geometry {
        pub coordinates: Vec<[f64; 2]>,
    }
}

/// Build the route URL. OSRM expects `lon,lat;lon,lat`.
pub fn route_url(base: &str, origin: Coordinate, destination: Coordinate) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
        base.trim_end_matches('/'),
        origin.lon,
        origin.lat,
        destination.lon,
        destination.lat
    )
}

/// Parse an OSRM response into a [`RouteResult`] with the dense,
/// unsimplified path. The caller applies polyline simplification.
pub fn parse_route(body: &str) -> Result<RouteResult, RequestError> {
    let parse_error = || RequestError::Parse("Failed to parse route.".to_string());

    let response: api::RouteResponse = serde_json::from_str(body).map_err(|_| parse_error())?;
    let Some(route) = response.routes.into_iter().next() else {
        return Err(RequestError::NotFound("No route found.".to_string()));
    };

    let mut path = Vec::with_capacity(route.geometry.coordinates.len());
    for [lon, lat] in route.geometry.coordinates {
        let coord = Coordinate::new(lat, lon).ok_or_else(parse_error)?;
        path.push(coord);
    }

    if path.len() < 2 || route.distance < 0.0 || route.duration < 0.0 {
        return Err(parse_error());
    }

    Ok(RouteResult {
        path,
        distance_m: route.distance,
        duration_s: route.duration,
    })
}
