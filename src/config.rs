//! Runtime configuration: upstream endpoints, search radius, timeouts and
//! the identifying client header.
//!
//! Every value can come from a CLI flag, an environment variable, or the
//! built-in default.

use clap::Args;
use std::time::Duration;
use thiserror::Error;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const OVERPASS_URL: &str = "https://overpass.kumi.systems/api/interpreter";
pub const USER_AGENT: &str = "MarketScout/1.0 (contact@example.com)";
pub const HF_ENDPOINT: &str = "https://router.huggingface.co/v1/chat/completions";
pub const HF_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Place-search (geocoding) endpoint.
    #[arg(long, env = "SCOUT_NOMINATIM_URL", default_value = NOMINATIM_URL)]
    pub nominatim_url: String,

    /// Map-data query endpoint.
    #[arg(long, env = "SCOUT_OVERPASS_URL", default_value = OVERPASS_URL)]
    pub overpass_url: String,

    /// User-Agent sent upstream. Nominatim's usage policy requires an
    /// application name and a contact address.
    #[arg(long, env = "SCOUT_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Search radius around the geocoded point, in meters.
    #[arg(long, env = "SCOUT_SEARCH_RADIUS_M", default_value_t = 1500)]
    pub search_radius_m: u32,

    /// Area-search timeout in seconds (also sent as the server-side hint).
    #[arg(long, env = "SCOUT_SEARCH_TIMEOUT_SECS", default_value_t = 25)]
    pub search_timeout_secs: u64,

    /// Geocoding timeout in seconds. Must be shorter than the search timeout.
    #[arg(long, env = "SCOUT_GEOCODE_TIMEOUT_SECS", default_value_t = 10)]
    pub geocode_timeout_secs: u64,

    /// Hugging Face API token for the analysis step.
    #[arg(long, env = "HUGGINGFACEHUB_API_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,

    /// Chat-completion endpoint used for the analysis step.
    #[arg(long, env = "SCOUT_HF_ENDPOINT", default_value = HF_ENDPOINT)]
    pub hf_endpoint: String,

    /// Model id used for the analysis step.
    #[arg(long, env = "SCOUT_HF_MODEL", default_value = HF_MODEL)]
    pub hf_model: String,

    /// Analysis request timeout in seconds.
    #[arg(long, env = "SCOUT_HF_TIMEOUT_SECS", default_value_t = 120)]
    pub hf_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nominatim_url: NOMINATIM_URL.to_string(),
            overpass_url: OVERPASS_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            search_radius_m: 1500,
            search_timeout_secs: 25,
            geocode_timeout_secs: 10,
            hf_token: None,
            hf_endpoint: HF_ENDPOINT.to_string(),
            hf_model: HF_MODEL.to_string(),
            hf_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("user agent must not be empty")]
    EmptyUserAgent,

    #[error("search radius must be greater than zero")]
    ZeroRadius,

    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("geocode timeout ({geocode}s) must be shorter than search timeout ({search}s)")]
    TimeoutOrder { geocode: u64, search: u64 },
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        if self.search_radius_m == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if self.geocode_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("geocode"));
        }
        if self.search_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("search"));
        }
        if self.hf_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("analysis"));
        }
        if self.geocode_timeout_secs >= self.search_timeout_secs {
            return Err(ConfigError::TimeoutOrder {
                geocode: self.geocode_timeout_secs,
                search: self.search_timeout_secs,
            });
        }
        Ok(())
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.geocode_timeout_secs)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    pub fn hf_timeout(&self) -> Duration {
        Duration::from_secs(self.hf_timeout_secs)
    }
}
