//! Run configuration (`config.toml`) and the JSON place list.
//!
//! Lookup order: explicit `--config` path, `./config.toml`, then
//! `<config_dir>/drivedist/config.toml`. No file at all means defaults, with
//! the destination left for the command line.

use crate::distance::DistanceResolver;
use crate::http;
use crate::location::{geocoder_for, GeocoderClient, GeocoderKind};
use crate::routing::{OsrmRouter, RouteClient};
use crate::throttle::Throttle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR: &str = "drivedist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid place list {}: {source}", .path.display())]
    PlaceList {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no destination configured; set [general] destination or pass --destination")]
    MissingDestination,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub geocoder: GeocoderConfig,
    pub router: RouterConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// The fixed destination every origin is routed to.
    pub destination: Option<String>,
    pub cities_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            destination: None,
            cities_file: PathBuf::from("./data/cities.json"),
            output_dir: PathBuf::from("./data"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub provider: GeocoderKind,
    /// Overrides the provider's public endpoint.
    pub base_url: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub min_interval_ms: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: GeocoderKind::Nominatim,
            base_url: None,
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            min_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub min_interval_ms: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: OsrmRouter::DEFAULT_BASE_URL.to_string(),
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            min_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the first config file
    /// found in the default locations, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::discover() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn discover() -> Option<PathBuf> {
        Self::candidate_paths().into_iter().find(|p| p.is_file())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR).join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// The configured destination, trimmed. Blank counts as missing.
    pub fn destination(&self) -> Result<&str, ConfigError> {
        self.general
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(ConfigError::MissingDestination)
    }

    pub fn log(&self) {
        log::info!(
            "Geocoder: {} ({}), router: {}",
            self.geocoder.provider,
            self.geocoder.base_url.as_deref().unwrap_or("public endpoint"),
            self.router.base_url
        );
        log::debug!(
            "Timeouts: geocoder {}s, router {}s; min interval: geocoder {}ms, router {}ms",
            self.geocoder.timeout_secs,
            self.router.timeout_secs,
            self.geocoder.min_interval_ms,
            self.router.min_interval_ms
        );
    }

    pub fn build_geocoder(&self) -> GeocoderClient {
        let g = &self.geocoder;
        GeocoderClient::new(geocoder_for(
            g.provider,
            http::agent(&g.user_agent, Duration::from_secs(g.timeout_secs)),
            g.base_url.as_deref(),
            Throttle::new(Duration::from_millis(g.min_interval_ms)),
        ))
    }

    pub fn build_router(&self) -> RouteClient {
        let r = &self.router;
        RouteClient::new(Box::new(OsrmRouter::new(
            http::agent(&r.user_agent, Duration::from_secs(r.timeout_secs)),
            &r.base_url,
            Throttle::new(Duration::from_millis(r.min_interval_ms)),
        )))
    }

    /// Wire providers, agents and throttles into a resolver for one run.
    pub fn build_resolver(&self) -> DistanceResolver {
        DistanceResolver::new(self.build_geocoder(), self.build_router())
    }
}

/// Read a JSON array of place names.
pub fn load_place_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::PlaceList {
        path: path.to_path_buf(),
        source,
    })
}
