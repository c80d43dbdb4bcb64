//! Time handling for the monitor core
//!
//! The core never reads a clock. Callers stamp each reading with a
//! monotonically nondecreasing counter; the crate only ever subtracts and
//! compares these values. The counter has no inherent wall-clock meaning
//! (the reference firmware advanced it by a fixed amount per cycle), so
//! the default one-day lookback in [`crate::constants::MS_PER_DAY`] is
//! only literal when the caller supplies real milliseconds.

/// Timestamp supplied by the caller, monotonically nondecreasing
pub type Timestamp = u64;

/// Fixed time source for tests and demos
///
/// Starts at a chosen instant and only moves when told to, which makes
/// decision-cycle tests deterministic.
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Current instant
    pub fn now(&self) -> Timestamp {
        self.timestamp
    }

    /// Jump to an absolute instant
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10_000);
        assert_eq!(time.now(), 10_000);
    }
}
