//! Geocoder client: the fail-soft boundary around a [`Geocoder`] provider.
//!
//! Every error is logged once, naming the input, and then either returned
//! typed (`lookup`) or collapsed to `None` (`resolve`).

use super::providers::Geocoder;
use super::types::{Coordinate, GeocodeError, GeocodeMatch};

pub struct GeocoderClient {
    provider: Box<dyn Geocoder>,
}

impl GeocoderClient {
    pub fn new(provider: Box<dyn Geocoder>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Resolve a place name to the provider's best match.
    ///
    /// Blank names fail with [`GeocodeError::Blank`] without touching the
    /// provider.
    pub fn lookup(&self, name: &str) -> Result<GeocodeMatch, GeocodeError> {
        let query = name.trim();
        let result = if query.is_empty() {
            Err(GeocodeError::Blank)
        } else {
            self.provider.geocode(query)
        };

        if let Err(ref e) = result {
            log::warn!("Could not find coordinates for '{}' ({}): {}", name, self.provider.name(), e);
        }
        result
    }

    /// Resolve a place name to a coordinate, or `None` on any failure.
    pub fn resolve(&self, name: &str) -> Option<Coordinate> {
        self.lookup(name).ok().map(|m| m.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGeocoder;

    #[test]
    fn test_resolve_known_place() {
        let (geocoder, calls) = FakeGeocoder::new(&[("Fresno, CA", 36.74, -119.78)]);
        let client = GeocoderClient::new(Box::new(geocoder));
        let c = client.resolve("Fresno, CA").unwrap();
        assert_eq!(c.lat(), 36.74);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let (geocoder, calls) = FakeGeocoder::new(&[]);
        let client = GeocoderClient::new(Box::new(geocoder));
        assert!(client.resolve("UnresolvablePlace123").is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_blank_name_skips_provider() {
        let (geocoder, calls) = FakeGeocoder::new(&[]);
        let client = GeocoderClient::new(Box::new(geocoder));
        assert!(matches!(client.lookup(""), Err(GeocodeError::Blank)));
        assert!(client.resolve("   \t").is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_query_is_trimmed() {
        let (geocoder, _calls) = FakeGeocoder::new(&[("San Jose, CA", 37.33, -121.89)]);
        let client = GeocoderClient::new(Box::new(geocoder));
        assert!(client.resolve("  San Jose, CA ").is_some());
    }

    #[test]
    fn test_transport_error_is_absorbed() {
        let (geocoder, calls) = FakeGeocoder::failing_transport();
        let client = GeocoderClient::new(Box::new(geocoder));
        assert!(matches!(client.lookup("Fresno, CA"), Err(GeocodeError::Transport(_))));
        assert!(client.resolve("Fresno, CA").is_none());
        assert_eq!(calls.get(), 2);
    }
}
