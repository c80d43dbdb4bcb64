//! Compile-time configuration for the monitor core
//!
//! All sizing and timing knobs live here so deployments can audit the
//! memory footprint and lookback behavior in one place. The values match
//! the reference single-plant deployment; adjust per target.

/// Milliseconds per second
pub const MS_PER_SECOND: u64 = 1_000;

/// Milliseconds per day
///
/// Default trend lookback. The core treats timestamps as an opaque
/// monotonic counter, so "one day" only holds when the caller supplies
/// real milliseconds.
pub const MS_PER_DAY: u64 = 86_400_000;

/// Default history buffer depth (one slot per decision cycle)
pub const DEFAULT_HISTORY_DEPTH: usize = 20;

/// Maximum observations a single decision can carry
///
/// One threshold observation plus one trend observation today; headroom
/// for environment-range narration.
pub const MAX_OBSERVATIONS: usize = 4;

/// Moisture percentage domain
pub const MOISTURE_MIN_PCT: f32 = 0.0;
/// Upper bound of the moisture percentage domain
pub const MOISTURE_MAX_PCT: f32 = 100.0;

/// Boundary between dry and moderate moisture, in percent
pub const MOISTURE_MODERATE_PCT: f32 = 30.0;
/// Boundary between moderate and wet moisture, in percent
pub const MOISTURE_WET_PCT: f32 = 60.0;
