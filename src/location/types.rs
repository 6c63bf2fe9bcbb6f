//! Core types for the location subsystem.

use std::fmt;
use thiserror::Error;

/// A geocoded point, kept as the exact decimal strings the place-search
/// service returned. The values are re-embedded verbatim into the
/// area-search query, so they are never parsed into floats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub lat: String,
    pub lon: String,
}

impl Coordinate {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Location resolution errors.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The service answered with zero matches.
    #[error("Location not found: '{0}'")]
    NotFound(String),

    /// Connection failure, timeout, or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The body did not have the expected shape.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl LocationError {
    /// Malformed responses are transport-class failures, same as network ones.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::InvalidResponse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_keeps_strings_verbatim() {
        let c = Coordinate::new("17.4100000", "78.4300000");
        assert_eq!(c.to_string(), "17.4100000,78.4300000");
    }

    #[test]
    fn test_transport_class() {
        assert!(LocationError::Network("refused".into()).is_transport());
        assert!(LocationError::InvalidResponse("missing lat".into()).is_transport());
        assert!(!LocationError::NotFound("Nowhere".into()).is_transport());
    }

    #[test]
    fn test_error_display() {
        let e = LocationError::NotFound("Atlantis".into());
        assert_eq!(e.to_string(), "Location not found: 'Atlantis'");
    }
}
