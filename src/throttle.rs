//! Minimum-interval gate for outbound provider requests.
//!
//! Public Nominatim and OSRM servers allow at most one request per second.
//! Each HTTP provider owns one `Throttle`; calls are sequential so a `Cell`
//! is enough.

use std::cell::Cell;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last: Cell<Option<Instant>>,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Cell::new(None),
        }
    }

    /// A throttle that never waits.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Block until at least `min_interval` has passed since the previous call,
    /// then mark the current instant. Returns how long it slept.
    pub fn wait(&self) -> Duration {
        let mut slept = Duration::ZERO;
        if let Some(prev) = self.last.get() {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                slept = self.min_interval - elapsed;
                std::thread::sleep(slept);
            }
        }
        self.last.set(Some(Instant::now()));
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_does_not_wait() {
        let t = Throttle::new(Duration::from_secs(5));
        assert_eq!(t.wait(), Duration::ZERO);
    }

    #[test]
    fn test_second_call_spaced() {
        let t = Throttle::new(Duration::from_millis(40));
        let start = Instant::now();
        t.wait();
        t.wait();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_disabled_never_sleeps() {
        let t = Throttle::disabled();
        for _ in 0..3 {
            assert_eq!(t.wait(), Duration::ZERO);
        }
    }
}
