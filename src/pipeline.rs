//! The lookup pipeline: geocode → area search → normalize.
//!
//! `run` always yields exactly one [`QueryOutcome`]. Failures from either
//! upstream call are mapped to a user-facing message at this boundary; the
//! underlying cause stays available through [`Pipeline::run_detailed`] and is
//! logged.

use crate::config::Config;
use crate::location::{Geocoder, LocationError, NominatimGeocoder};
use crate::search::{normalize, AreaSearch, Business, OverpassClient, SearchError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Result of one pipeline run, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    Success { businesses: Vec<Business> },
    NoResults,
    #[serde(rename = "error")]
    Failure { message: String },
}

impl QueryOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::NoResults => "no_results",
            Self::Failure { .. } => "error",
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Geocoding failed, whether with zero matches or a transport problem.
    #[error("could not resolve '{location}'")]
    Geocode {
        location: String,
        #[source]
        source: LocationError,
    },

    #[error("area search failed")]
    Search(#[source] SearchError),
}

impl PipelineError {
    /// The message shown to the user. Both geocoding causes collapse into one
    /// location message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Geocode { location, .. } => format!(
                "Error: Could not find coordinates for '{}'. Please try a more specific location.",
                location
            ),
            Self::Search(SearchError::Network(_)) => {
                "Error: Failed to fetch data from OpenStreetMap's API due to a network issue."
                    .to_string()
            }
            Self::Search(SearchError::InvalidResponse(_)) => {
                "Error: Failed to parse the response from OpenStreetMap's API.".to_string()
            }
        }
    }
}

impl From<Result<Vec<Business>, PipelineError>> for QueryOutcome {
    fn from(result: Result<Vec<Business>, PipelineError>) -> Self {
        match result {
            Ok(businesses) if businesses.is_empty() => Self::NoResults,
            Ok(businesses) => Self::Success { businesses },
            Err(e) => Self::Failure {
                message: e.user_message(),
            },
        }
    }
}

/// Geocoder, area search and radius. Immutable; clones share the clients.
#[derive(Clone)]
pub struct Pipeline {
    geocoder: Arc<dyn Geocoder>,
    search: Arc<dyn AreaSearch>,
    radius_m: u32,
}

impl Pipeline {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        search: Arc<dyn AreaSearch>,
        radius_m: u32,
    ) -> Self {
        Self {
            geocoder,
            search,
            radius_m,
        }
    }

    /// Pipeline backed by Nominatim and Overpass.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(NominatimGeocoder::new(config)),
            Arc::new(OverpassClient::new(config)),
            config.search_radius_m,
        )
    }

    pub fn run(&self, location: &str, category: &str) -> QueryOutcome {
        let result = self.run_detailed(location, category);
        if let Err(ref e) = result {
            log_failure(e);
        }
        QueryOutcome::from(result)
    }

    pub fn run_detailed(
        &self,
        location: &str,
        category: &str,
    ) -> Result<Vec<Business>, PipelineError> {
        let center = self
            .geocoder
            .resolve(location)
            .map_err(|source| PipelineError::Geocode {
                location: location.to_string(),
                source,
            })?;

        let features = self
            .search
            .search(&center, category, self.radius_m)
            .map_err(PipelineError::Search)?;

        let businesses = normalize(&features);
        tracing::info!(
            location,
            category,
            features = features.len(),
            businesses = businesses.len(),
            "lookup complete"
        );
        Ok(businesses)
    }
}

fn log_failure(e: &PipelineError) {
    match e {
        PipelineError::Geocode { location, source } => {
            tracing::warn!(
                location,
                cause = %source,
                transport = source.is_transport(),
                "geocoding failed"
            );
        }
        PipelineError::Search(source) => {
            tracing::warn!(cause = %source, "area search failed");
        }
    }
}
