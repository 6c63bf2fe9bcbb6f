//! Location subsystem: turns a free-text place name into a coordinate pair.

pub mod nominatim;
pub mod types;

pub use nominatim::NominatimGeocoder;
pub use types::{Coordinate, LocationError};

/// Resolves a place description to a single coordinate.
pub trait Geocoder: Send + Sync {
    fn resolve(&self, query: &str) -> Result<Coordinate, LocationError>;
}
