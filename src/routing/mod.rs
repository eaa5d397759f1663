//! Driving-route lookup between two coordinates.

pub mod client;
pub mod osrm;
pub mod types;

pub use client::RouteClient;
pub use osrm::{OsrmRouter, Router};
pub use types::{RouteError, RouteMetrics};
