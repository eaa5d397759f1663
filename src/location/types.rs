//! Core types for the geocoding subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated WGS84 point. Only constructible through [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Returns `None` unless both values are finite and within
    /// lat -90..90, lon -180..180.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
        {
            Some(Self { lat, lon })
        } else {
            None
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lon >= 0.0 { 'E' } else { 'W' };
        write!(f, "{:.4}\u{00B0}{}, {:.4}\u{00B0}{}", self.lat.abs(), ns, self.lon.abs(), ew)
    }
}

/// The best candidate a provider returned for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub coordinate: Coordinate,
    /// Full address as reported by the provider, when it has one.
    pub display_name: Option<String>,
}

/// Which geocoding provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeocoderKind {
    #[default]
    Nominatim,
    #[serde(alias = "esri")]
    ArcGis,
}

impl fmt::Display for GeocoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominatim => write!(f, "Nominatim"),
            Self::ArcGis => write!(f, "ArcGIS"),
        }
    }
}

impl FromStr for GeocoderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nominatim" | "osm" | "openstreetmap" => Ok(Self::Nominatim),
            "arcgis" | "esri" => Ok(Self::ArcGis),
            _ => Err(format!("Unknown geocoder '{}'. Use 'nominatim' or 'arcgis'.", s)),
        }
    }
}

/// Geocoding errors.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("place name is empty")]
    Blank,
    #[error("location not found: '{0}'")]
    NotFound(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl From<ureq::Error> for GeocodeError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => Self::Transport(format!("provider returned HTTP {}", code)),
            other => Self::Transport(other.to_string()),
        }
    }
}
