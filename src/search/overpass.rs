//! Overpass API area search.
//!
//! Builds one Overpass QL query selecting nodes, ways and relations whose
//! `amenity`, `shop` or `craft` value contains the category text
//! (case-insensitive regex), within a radius of the center point.

use super::types::RawFeature;
use super::{AreaSearch, SearchError};
use crate::config::Config;
use crate::location::Coordinate;
use serde::Deserialize;
use std::io::Read;

/// Key regex shared by the three element selectors.
const CATEGORY_KEYS: &str = "^(amenity|shop|craft)$";

const ELEMENT_KINDS: [&str; 3] = ["node", "way", "relation"];

#[derive(Deserialize, Debug)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<RawFeature>,
}

pub struct OverpassClient {
    agent: ureq::Agent,
    url: String,
    user_agent: String,
    timeout_secs: u64,
}

impl OverpassClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.search_timeout())
            .build();
        Self {
            agent,
            url: config.overpass_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout_secs: config.search_timeout_secs,
        }
    }
}

impl AreaSearch for OverpassClient {
    fn search(
        &self,
        center: &Coordinate,
        category: &str,
        radius_m: u32,
    ) -> Result<Vec<RawFeature>, SearchError> {
        let query = build_query(center, category, radius_m, self.timeout_secs);
        tracing::debug!(%query, "overpass query");

        let response = self
            .agent
            .post(&self.url)
            .set("User-Agent", &self.user_agent)
            .send_form(&[("data", query.as_str())])
            .map_err(|e| {
                tracing::error!(error = %e, "overpass request failed");
                SearchError::Network(e.to_string())
            })?;

        let features = read_response(response.into_reader())?;
        tracing::info!(
            category,
            center = %center,
            count = features.len(),
            "fetched map features"
        );
        Ok(features)
    }
}

/// Render the Overpass QL query.
///
/// Coordinates are interpolated exactly as the geocoder returned them.
pub fn build_query(
    center: &Coordinate,
    category: &str,
    radius_m: u32,
    timeout_secs: u64,
) -> String {
    let value = escape_ql_string(category);
    let around = format!("(around:{},{},{})", radius_m, center.lat, center.lon);

    let mut query = format!("[out:json][timeout:{}];\n(\n", timeout_secs);
    for kind in ELEMENT_KINDS {
        query.push_str(&format!(
            "  {}[~\"{}\"~\"{}\",i]{};\n",
            kind, CATEGORY_KEYS, value, around
        ));
    }
    query.push_str(");\nout center;\n");
    query
}

/// Escape a value for a double-quoted QL string. Regex metacharacters pass
/// through, so the category is still a regex fragment.
fn escape_ql_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the body as it streams in, with no size cap. A failed read is a
/// network error; a body that is not the expected JSON is invalid.
fn read_response(body: impl Read) -> Result<Vec<RawFeature>, SearchError> {
    serde_json::from_reader::<_, OverpassResponse>(body)
        .map(|r| r.elements)
        .map_err(|e| {
            tracing::error!(error = %e, "failed to read overpass response");
            if e.is_io() {
                SearchError::Network(e.to_string())
            } else {
                SearchError::InvalidResponse(e.to_string())
            }
        })
}
