//! Geocoding subsystem.
//!
//! Resolves free-text place names to coordinates through a pluggable
//! provider (Nominatim or ArcGIS).

pub mod providers;
pub mod resolver;
pub mod types;

pub use providers::{geocoder_for, ArcGisGeocoder, Geocoder, NominatimGeocoder};
pub use resolver::GeocoderClient;
pub use types::{Coordinate, GeocodeError, GeocodeMatch, GeocoderKind};
