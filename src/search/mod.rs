//! Area search: nearby map features for a category, and their reduction to
//! business records.

pub mod normalize;
pub mod overpass;
pub mod types;

pub use normalize::normalize;
pub use overpass::OverpassClient;
pub use types::{Business, RawFeature};

use crate::location::Coordinate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection failure, timeout, or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Finds map features around a point whose category tags match a text.
pub trait AreaSearch: Send + Sync {
    fn search(
        &self,
        center: &Coordinate,
        category: &str,
        radius_m: u32,
    ) -> Result<Vec<RawFeature>, SearchError>;
}
