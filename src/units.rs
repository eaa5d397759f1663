//! Unit conversions for route metrics.
//!
//! The two mile constants are not exact reciprocals of each other. Both are
//! kept as published values; km→mi output always uses `MILES_PER_KILOMETER`.

/// Kilometers in one statute mile.
pub const KILOMETERS_PER_MILE: f64 = 1.60934;

/// Statute miles in one kilometer.
pub const MILES_PER_KILOMETER: f64 = 0.621371;

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

pub fn km_from_meters(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

pub fn mi_from_km(km: f64) -> f64 {
    km * MILES_PER_KILOMETER
}

pub fn km_from_mi(mi: f64) -> f64 {
    mi * KILOMETERS_PER_MILE
}

pub fn min_from_seconds(seconds: f64) -> f64 {
    seconds / SECONDS_PER_MINUTE
}

pub fn hr_from_min(minutes: f64) -> f64 {
    minutes / MINUTES_PER_HOUR
}
