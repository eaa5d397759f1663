//! Batch runner: many origins against one fixed destination.

use crate::distance::{DistanceRecord, DistanceResolver, ResolutionFailure};

/// Result of one batch: successes in input order plus the skipped pairs.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<DistanceRecord>,
    pub failures: Vec<ResolutionFailure>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn into_records(self) -> Vec<DistanceRecord> {
        self.records
    }
}

pub struct BatchRunner<'a> {
    resolver: &'a DistanceResolver,
}

impl<'a> BatchRunner<'a> {
    pub fn new(resolver: &'a DistanceResolver) -> Self {
        Self { resolver }
    }

    /// Resolve every origin against `destination`, sequentially and in order.
    /// A failed pair is skipped; the batch always completes.
    pub fn run<S: AsRef<str>>(&self, origins: &[S], destination: &str) -> BatchReport {
        let mut report = BatchReport::default();

        for origin in origins {
            let origin = origin.as_ref();
            match self.resolver.resolve(origin, destination) {
                Ok(record) => {
                    log::debug!(
                        "{} -> {}: {:.1} km, {:.2} min",
                        record.origin, record.destination, record.distance_km, record.duration_min
                    );
                    report.records.push(record);
                }
                Err(failure) => {
                    log::info!("Skipping '{}' [{}]: {}", origin, failure.stage(), failure);
                    report.failures.push(failure);
                }
            }
        }

        log::info!(
            "Resolved {} of {} origins to '{}'",
            report.records.len(),
            report.attempted(),
            destination
        );
        report
    }
}

/// Convenience wrapper returning only the successful records.
pub fn run_batch<S: AsRef<str>>(
    resolver: &DistanceResolver,
    origins: &[S],
    destination: &str,
) -> Vec<DistanceRecord> {
    BatchRunner::new(resolver).run(origins, destination).into_records()
}
