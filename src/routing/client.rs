//! Route client: the fail-soft boundary around a [`Router`].

use super::osrm::Router;
use super::types::{RouteError, RouteMetrics};
use crate::location::Coordinate;

pub struct RouteClient {
    router: Box<dyn Router>,
}

impl RouteClient {
    pub fn new(router: Box<dyn Router>) -> Self {
        Self { router }
    }

    pub fn provider_name(&self) -> &str {
        self.router.name()
    }

    /// Look up the driving route, logging the provider's reason on failure.
    pub fn lookup(&self, origin: Coordinate, destination: Coordinate) -> Result<RouteMetrics, RouteError> {
        let result = self.router.route(origin, destination);
        if let Err(ref e) = result {
            log::warn!("Route lookup {} -> {} failed: {}", origin, destination, e);
        }
        result
    }

    pub fn route_between(&self, origin: Coordinate, destination: Coordinate) -> Option<RouteMetrics> {
        self.lookup(origin, destination).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRouter;

    fn coords() -> (Coordinate, Coordinate) {
        (Coordinate::new(36.74, -119.78).unwrap(), Coordinate::new(37.33, -121.89).unwrap())
    }

    #[test]
    fn test_route_between_ok() {
        let (router, calls) = FakeRouter::fixed(250_000.0, 9_000.0);
        let client = RouteClient::new(Box::new(router));
        let (a, b) = coords();
        let m = client.route_between(a, b).unwrap();
        assert_eq!(m.distance_meters, 250_000.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_provider_status_becomes_none() {
        let (router, _calls) = FakeRouter::status("NoRoute");
        let client = RouteClient::new(Box::new(router));
        let (a, b) = coords();
        assert!(client.route_between(a, b).is_none());
        let err = client.lookup(a, b).unwrap_err();
        assert!(err.to_string().contains("NoRoute"));
    }

    #[test]
    fn test_transport_kind_preserved() {
        let (router, _calls) = FakeRouter::unreachable();
        let client = RouteClient::new(Box::new(router));
        let (a, b) = coords();
        assert!(client.lookup(a, b).unwrap_err().is_transport());
    }
}
