//! Nominatim place-search provider.

use super::types::{Coordinate, LocationError};
use super::Geocoder;
use crate::config::Config;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize, Debug, Clone)]
struct NominatimResult {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Resolves free-text places via OpenStreetMap Nominatim.
///
/// One `resolve` call issues exactly one request asking for a single result.
pub struct NominatimGeocoder {
    agent: ureq::Agent,
    url: String,
    user_agent: String,
}

impl NominatimGeocoder {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.geocode_timeout())
            .build();
        Self {
            agent,
            url: config.nominatim_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, query: &str) -> Result<Coordinate, LocationError> {
        let response = self
            .agent
            .get(&self.url)
            .set("User-Agent", &self.user_agent)
            .query("q", query)
            .query("format", "json")
            .query("limit", "1")
            .call()
            .map_err(|e| {
                tracing::error!(query, error = %e, "geocoding request failed");
                LocationError::Network(e.to_string())
            })?;

        read_response(query, response.into_reader())
    }
}

/// Decode the body straight from the stream; a failed read mid-body is a
/// network error, anything else is a malformed response.
fn read_response(query: &str, body: impl Read) -> Result<Coordinate, LocationError> {
    let results: Vec<NominatimResult> = serde_json::from_reader(body).map_err(|e| {
        tracing::error!(query, error = %e, "failed to read geocoding response");
        if e.is_io() {
            LocationError::Network(e.to_string())
        } else {
            LocationError::InvalidResponse(e.to_string())
        }
    })?;

    let Some(first) = results.into_iter().next() else {
        tracing::warn!(query, "no geocoding results");
        return Err(LocationError::NotFound(query.to_string()));
    };

    tracing::info!(
        query,
        lat = %first.lat,
        lon = %first.lon,
        place = first.display_name.as_deref().unwrap_or(""),
        "geocoded location"
    );
    Ok(Coordinate::new(first.lat, first.lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_result() {
        let body = r#"[{"lat":"17.4126274","lon":"78.4482821","display_name":"Banjara Hills, Hyderabad"}]"#;
        let c = read_response("Banjara Hills", body.as_bytes()).unwrap();
        assert_eq!(c.lat, "17.4126274");
        assert_eq!(c.lon, "78.4482821");
    }

    #[test]
    fn test_parse_empty_is_not_found() {
        let err = read_response("Nowhere", "[]".as_bytes()).unwrap_err();
        assert!(matches!(err, LocationError::NotFound(q) if q == "Nowhere"));
    }

    #[test]
    fn test_parse_missing_fields_is_invalid() {
        let err = read_response("x", r#"[{"display_name":"somewhere"}]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LocationError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_non_array_is_invalid() {
        let err = read_response("x", r#"{"error":"Unable to geocode"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LocationError::InvalidResponse(_)));
        let err = read_response("x", "<html>busy</html>".as_bytes()).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_numeric_coordinates_are_rejected() {
        // The service always sends strings; numbers mean a different API.
        let err = read_response("x", r#"[{"lat":17.41,"lon":78.43}]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LocationError::InvalidResponse(_)));
    }
}
