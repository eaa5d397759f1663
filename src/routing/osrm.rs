//! OSRM route service provider.
//!
//! `GET {base}/route/v1/driving/{lon},{lat};{lon},{lat}?overview=false`

use super::types::{RouteError, RouteMetrics};
use crate::http;
use crate::location::Coordinate;
use crate::throttle::Throttle;
use serde::Deserialize;

/// A point-to-point routing backend.
pub trait Router {
    fn name(&self) -> &str;

    /// Route from `origin` to `destination`. Order matters.
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<RouteMetrics, RouteError>;
}

#[derive(Deserialize, Debug)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Deserialize, Debug)]
pub struct OsrmRoute {
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

pub struct OsrmRouter {
    agent: ureq::Agent,
    base: String,
    throttle: Throttle,
}

impl OsrmRouter {
    pub const DEFAULT_BASE_URL: &'static str = "https://router.project-osrm.org";
    pub const DRIVING: &'static str = "driving";

    pub fn new(agent: ureq::Agent, base_url: &str, throttle: Throttle) -> Self {
        Self {
            agent,
            base: http::base_url(base_url),
            throttle,
        }
    }

    /// OSRM wants longitude first.
    pub fn route_url(&self, origin: Coordinate, destination: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base,
            Self::DRIVING,
            origin.lon(),
            origin.lat(),
            destination.lon(),
            destination.lat(),
        )
    }
}

impl Router for OsrmRouter {
    fn name(&self) -> &str {
        "OSRM"
    }

    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<RouteMetrics, RouteError> {
        self.throttle.wait();

        let url = self.route_url(origin, destination);
        log::debug!("GET {}?overview=false", url);

        match self.agent.get(&url).query("overview", "false").call() {
            Ok(response) => {
                let body: OsrmResponse = response
                    .into_json()
                    .map_err(|e| RouteError::InvalidResponse(e.to_string()))?;
                metrics_from_response(body)
            }
            // OSRM sends its error code in a JSON body with 4xx statuses.
            Err(ureq::Error::Status(status, response)) => match response.into_json::<OsrmResponse>() {
                Ok(body) => Err(RouteError::NoRoute {
                    code: body.code,
                    message: body.message,
                }),
                Err(_) => Err(RouteError::NoRoute {
                    code: format!("HTTP {}", status),
                    message: None,
                }),
            },
            Err(e) => Err(RouteError::Transport(e.to_string())),
        }
    }
}

/// Take the first route of a successful response.
pub fn metrics_from_response(body: OsrmResponse) -> Result<RouteMetrics, RouteError> {
    if body.code != "Ok" {
        return Err(RouteError::NoRoute {
            code: body.code,
            message: body.message,
        });
    }

    let route = body.routes.into_iter().next().ok_or_else(|| RouteError::NoRoute {
        code: "NoRoute".into(),
        message: Some("response contained no routes".into()),
    })?;

    if !(route.distance.is_finite() && route.distance >= 0.0)
        || !(route.duration.is_finite() && route.duration >= 0.0)
    {
        return Err(RouteError::InvalidResponse(format!(
            "negative or non-finite route summary: distance={}, duration={}",
            route.distance, route.duration
        )));
    }

    Ok(RouteMetrics {
        distance_meters: route.distance,
        duration_seconds: route.duration,
    })
}
