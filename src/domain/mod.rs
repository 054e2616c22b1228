//! Core domain values shared by all operations.

use serde_json::Value;

/// A WGS84 point as (latitude, longitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the valid WGS84 ranges.
    /// Out-of-range input is a parse error at the call site, never clamped.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Some(Self { lat, lon })
        } else {
            None
        }
    }

    /// Build a coordinate from two JSON fields that providers serve either as
    /// numbers or as numeric strings (Nominatim sends `"lat": "52.3"`).
    pub(crate) fn from_json(lat: Option<&Value>, lon: Option<&Value>) -> Option<Self> {
        Self::new(json_number(lat)?, json_number(lon)?)
    }
}

/// An immutable driving route: the path plus its totals.
/// `path` has at least two points on any successfully parsed route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: f64,
}

fn json_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
