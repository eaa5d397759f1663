//! Geocoding providers: OpenStreetMap Nominatim and ArcGIS World Geocoder.

use super::types::{Coordinate, GeocodeError, GeocodeMatch, GeocoderKind};
use crate::http;
use crate::throttle::Throttle;
use serde::Deserialize;

/// A forward geocoding backend.
///
/// Implementations issue at most one request per call and never retry.
pub trait Geocoder {
    fn name(&self) -> &str;

    /// Resolve a non-blank query to the provider's best match.
    fn geocode(&self, query: &str) -> Result<GeocodeMatch, GeocodeError>;
}

/// Construct the provider selected by `kind`. `base_url` overrides the
/// public endpoint (self-hosted instances, tests).
pub fn geocoder_for(
    kind: GeocoderKind,
    agent: ureq::Agent,
    base_url: Option<&str>,
    throttle: Throttle,
) -> Box<dyn Geocoder> {
    match kind {
        GeocoderKind::Nominatim => Box::new(NominatimGeocoder::new(
            agent,
            base_url.unwrap_or(NominatimGeocoder::DEFAULT_BASE_URL),
            throttle,
        )),
        GeocoderKind::ArcGis => Box::new(ArcGisGeocoder::new(
            agent,
            base_url.unwrap_or(ArcGisGeocoder::DEFAULT_BASE_URL),
            throttle,
        )),
    }
}

fn checked_coordinate(lat: f64, lon: f64) -> Result<Coordinate, GeocodeError> {
    Coordinate::new(lat, lon)
        .ok_or_else(|| GeocodeError::InvalidResponse(format!("coordinate out of range: {}, {}", lat, lon)))
}

// ─── Nominatim provider ─────────────────────────────────────────

#[derive(Deserialize, Debug, Clone)]
pub struct NominatimResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

pub struct NominatimGeocoder {
    agent: ureq::Agent,
    base: String,
    throttle: Throttle,
}

impl NominatimGeocoder {
    pub const DEFAULT_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";

    pub fn new(agent: ureq::Agent, base_url: &str, throttle: Throttle) -> Self {
        Self {
            agent,
            base: http::base_url(base_url),
            throttle,
        }
    }
}

impl Geocoder for NominatimGeocoder {
    fn name(&self) -> &str {
        "Nominatim"
    }

    fn geocode(&self, query: &str) -> Result<GeocodeMatch, GeocodeError> {
        self.throttle.wait();

        let url = format!("{}/search", self.base);
        log::debug!("GET {} q={:?}", url, query);

        let response = self
            .agent
            .get(&url)
            .query("q", query)
            .query("format", "json")
            .query("limit", "1")
            .call()?;

        let results: Vec<NominatimResult> = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        nominatim_best_match(query, results)
    }
}

/// Take the first Nominatim result. Nominatim encodes lat/lon as strings.
pub fn nominatim_best_match(
    query: &str,
    results: Vec<NominatimResult>,
) -> Result<GeocodeMatch, GeocodeError> {
    let top = results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

    let lat: f64 = top
        .lat
        .trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude '{}'", top.lat)))?;
    let lon: f64 = top
        .lon
        .trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude '{}'", top.lon)))?;

    Ok(GeocodeMatch {
        coordinate: checked_coordinate(lat, lon)?,
        display_name: Some(top.display_name),
    })
}

// ─── ArcGIS provider ────────────────────────────────────────────

#[derive(Deserialize, Debug)]
pub struct ArcGisResponse {
    #[serde(default)]
    pub candidates: Vec<ArcGisCandidate>,
    #[serde(default)]
    pub error: Option<ArcGisErrorBody>,
}

#[derive(Deserialize, Debug)]
pub struct ArcGisCandidate {
    pub address: String,
    pub location: ArcGisPoint,
    #[serde(default)]
    pub score: f64,
}

/// ArcGIS points are `x` = longitude, `y` = latitude.
#[derive(Deserialize, Debug)]
pub struct ArcGisPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize, Debug)]
pub struct ArcGisErrorBody {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

pub struct ArcGisGeocoder {
    agent: ureq::Agent,
    base: String,
    throttle: Throttle,
}

impl ArcGisGeocoder {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer";

    pub fn new(agent: ureq::Agent, base_url: &str, throttle: Throttle) -> Self {
        Self {
            agent,
            base: http::base_url(base_url),
            throttle,
        }
    }
}

impl Geocoder for ArcGisGeocoder {
    fn name(&self) -> &str {
        "ArcGIS"
    }

    fn geocode(&self, query: &str) -> Result<GeocodeMatch, GeocodeError> {
        self.throttle.wait();

        let url = format!("{}/findAddressCandidates", self.base);
        log::debug!("GET {} SingleLine={:?}", url, query);

        let response = self
            .agent
            .get(&url)
            .query("SingleLine", query)
            .query("f", "json")
            .query("maxLocations", "1")
            .call()?;

        let body: ArcGisResponse = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        arcgis_best_match(query, body)
    }
}

/// ArcGIS reports errors inside an HTTP 200 body.
pub fn arcgis_best_match(query: &str, body: ArcGisResponse) -> Result<GeocodeMatch, GeocodeError> {
    if let Some(err) = body.error {
        return Err(GeocodeError::InvalidResponse(format!(
            "ArcGIS error {}: {}",
            err.code, err.message
        )));
    }

    let top = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
    log::debug!("ArcGIS matched '{}' to '{}' (score {})", query, top.address, top.score);

    Ok(GeocodeMatch {
        coordinate: checked_coordinate(top.location.y, top.location.x)?,
        display_name: Some(top.address),
    })
}
