//! Distance resolver: place name pair → [`DistanceRecord`].
//!
//! Flow: geocode origin → geocode destination → route → unit conversion.
//! The first failing stage short-circuits the rest.

use crate::location::GeocoderClient;
use crate::routing::{RouteClient, RouteMetrics};
use crate::units;
use serde::Serialize;

/// Driving distance and duration between two named places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRecord {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub distance_mi: f64,
    pub duration_min: f64,
    pub duration_hr: f64,
}

impl DistanceRecord {
    pub fn from_metrics(origin: &str, destination: &str, metrics: RouteMetrics) -> Self {
        let distance_km = units::km_from_meters(metrics.distance_meters);
        let duration_min = units::min_from_seconds(metrics.duration_seconds);
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance_km,
            distance_mi: units::mi_from_km(distance_km),
            duration_min,
            duration_hr: units::hr_from_min(duration_min),
        }
    }
}

/// Which stage stopped a resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolutionFailure {
    #[error("could not geocode origin '{origin}'")]
    GeocodeOrigin { origin: String },
    #[error("could not geocode destination '{destination}'")]
    GeocodeDestination { destination: String },
    #[error("no route from '{origin}' to '{destination}': {reason}")]
    RouteLookup {
        origin: String,
        destination: String,
        reason: String,
    },
    #[error("network error routing '{origin}' to '{destination}': {reason}")]
    Network {
        origin: String,
        destination: String,
        reason: String,
    },
}

impl ResolutionFailure {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::GeocodeOrigin { .. } => "geocode-origin",
            Self::GeocodeDestination { .. } => "geocode-destination",
            Self::RouteLookup { .. } => "route-lookup",
            Self::Network { .. } => "network-error",
        }
    }
}

pub type ResolutionOutcome = Result<DistanceRecord, ResolutionFailure>;

pub struct DistanceResolver {
    geocoder: GeocoderClient,
    router: RouteClient,
}

impl DistanceResolver {
    pub fn new(geocoder: GeocoderClient, router: RouteClient) -> Self {
        Self { geocoder, router }
    }

    pub fn geocoder(&self) -> &GeocoderClient {
        &self.geocoder
    }

    pub fn router(&self) -> &RouteClient {
        &self.router
    }

    pub fn resolve(&self, origin: &str, destination: &str) -> ResolutionOutcome {
        let from = self.geocoder.resolve(origin).ok_or_else(|| ResolutionFailure::GeocodeOrigin {
            origin: origin.to_string(),
        })?;

        let to = self
            .geocoder
            .resolve(destination)
            .ok_or_else(|| ResolutionFailure::GeocodeDestination {
                destination: destination.to_string(),
            })?;

        let metrics = self.router.lookup(from, to).map_err(|e| {
            let (origin, destination, reason) = (origin.to_string(), destination.to_string(), e.to_string());
            if e.is_transport() {
                ResolutionFailure::Network { origin, destination, reason }
            } else {
                ResolutionFailure::RouteLookup { origin, destination, reason }
            }
        })?;

        Ok(DistanceRecord::from_metrics(origin, destination, metrics))
    }
}
