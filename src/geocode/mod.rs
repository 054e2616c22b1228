//! Forward geocoding against a Nominatim-style search endpoint.

use reqwest::Url;
use serde_json::Value;

use crate::domain::Coordinate;
use crate::error::RequestError;

/// Build the search URL: `<base>/search?q=<text>&format=json&limit=1`.
pub fn geocode_url(base: &str, query: &str) -> Result<String, RequestError> {
    let url = Url::parse_with_params(
        &format!("{}/search", base.trim_end_matches('/')),
        &[("q", query), ("format", "json"), ("limit", "1")],
    )
    .map_err(|e| RequestError::Transport(format!("Invalid geocoding URL: {}", e)))?;
    Ok(url.into())
}

/// Parse a Nominatim response body: a JSON array of candidates, first
/// element only, `lat`/`lon` as numeric strings or numbers.
pub fn parse_geocode(body: &str) -> Result<Coordinate, RequestError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|_| RequestError::Parse("Geocoding parse error.".to_string()))?;
    let candidates = value
        .as_array()
        .ok_or_else(|| RequestError::Parse("Geocoding parse error.".to_string()))?;

    let Some(first) = candidates.first() else {
        return Err(RequestError::NotFound("Destination not found.".to_string()));
    };

    Coordinate::from_json(first.get("lat"), first.get("lon"))
        .ok_or_else(|| RequestError::Parse("Geocoding parse error.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_url_encodes_query() {
        let url = geocode_url("https://nominatim.openstreetmap.org", "Berlin Hbf").unwrap();
        assert_eq!(
            url,
            "https://nominatim.openstreetmap.org/search?q=Berlin+Hbf&format=json&limit=1"
        );
    }

    #[test]
    fn test_geocode_url_tolerates_trailing_slash() {
        let url = geocode_url("https://nominatim.openstreetmap.org/", "Berlin").unwrap();
        assert!(url.starts_with("https://nominatim.openstreetmap.org/search?"));
    }

    #[test]
    fn test_parse_first_candidate_with_string_fields() {
        let body = r#"[{"lat": "52.3759", "lon": "10.5268", "display_name": "Braunschweig"},
                       {"lat": "0.0", "lon": "0.0"}]"#;
        let coord = parse_geocode(body).unwrap();
        assert_eq!(coord.lat, 52.3759);
        assert_eq!(coord.lon, 10.5268);
    }

    #[test]
    fn test_parse_numeric_fields() {
        let body = r#"[{"lat": 52.5, "lon": 13.4}]"#;
        let coord = parse_geocode(body).unwrap();
        assert_eq!(coord.lat, 52.5);
        assert_eq!(coord.lon, 13.4);
    }

    #[test]
    fn test_empty_array_is_not_found() {
        let err = parse_geocode("[]").unwrap_err();
        assert_eq!(
            err,
            RequestError::NotFound("Destination not found.".to_string())
        );
        assert_eq!(err.to_string(), "Destination not found.");
    }

    #[test]
    fn test_missing_lon_is_parse_error() {
        let err = parse_geocode(r#"[{"lat": "52.3"}]"#).unwrap_err();
        assert_eq!(
            err,
            RequestError::Parse("Geocoding parse error.".to_string())
        );
    }

    #[test]
    fn test_unparsable_lat_is_parse_error() {
        let err = parse_geocode(r#"[{"lat": "north", "lon": "10.5"}]"#).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_is_parse_error_not_clamped() {
        let err = parse_geocode(r#"[{"lat": "95.0", "lon": "10.5"}]"#).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn test_non_array_body_is_parse_error() {
        assert!(matches!(
            parse_geocode(r#"{"error": "nope"}"#),
            Err(RequestError::Parse(_))
        ));
        assert!(matches!(
            parse_geocode("not json"),
            Err(RequestError::Parse(_))
        ));
    }
}
