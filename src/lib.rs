//! Driving distance and duration between named places.
//!
//! Place names are geocoded (Nominatim or ArcGIS), routed with OSRM's
//! driving profile and converted to km/mi and min/hr. A batch of origins
//! against one destination keeps going past individual failures.

pub mod batch;
pub mod config;
pub mod distance;
pub mod http;
pub mod location;
pub mod output;
pub mod routing;
pub mod throttle;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{run_batch, BatchReport, BatchRunner};
pub use distance::{DistanceRecord, DistanceResolver, ResolutionFailure, ResolutionOutcome};
