//! Error Types for the Monitor Core
//!
//! ## Design Philosophy
//!
//! The error system follows the same embedded constraints as the rest of
//! the crate:
//!
//! 1. **Small Size**: Variants carry at most one `f32`, so the enum fits
//!    in 8 bytes and is cheap to return from the hot decision path.
//!
//! 2. **No Heap Allocation**: No `String`, no boxed sources. Everything
//!    needed to act on the error is inline.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so callers can store,
//!    log, and rethrow them without move bookkeeping.
//!
//! ## Error Severity
//!
//! Not every variant aborts a decision cycle:
//!
//! - `ProfileNotFound` is fatal to the cycle: without acceptable ranges
//!   there is nothing to decide against. The original firmware pressed on
//!   with a null profile reference here; this crate refuses instead.
//! - `HistoryUnavailable` is advisory: the trend comparison is skipped
//!   and a threshold-only decision is still produced.
//! - `InvalidReading` is fatal to the cycle: a moisture percentage
//!   outside [0, 100] (or NaN) would otherwise be silently misclassified.
//!
//! Retry policy belongs to the sampling loop that owns the sensors, not
//! to this core; nothing here is retried internally.

use thiserror_no_std::Error;

/// Result type for monitor core operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Monitor core errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MonitorError {
    /// Requested plant name is absent from the profile registry
    #[error("plant profile not found in registry")]
    ProfileNotFound,

    /// History buffer holds no entries yet
    #[error("history buffer is empty")]
    HistoryUnavailable,

    /// Moisture reading outside the [0, 100] percentage domain, or NaN
    #[error("moisture reading {value} outside [0, 100]")]
    InvalidReading {
        /// The offending moisture percentage
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ProfileNotFound => defmt::write!(fmt, "profile not found"),
            Self::HistoryUnavailable => defmt::write!(fmt, "history empty"),
            Self::InvalidReading { value } => {
                defmt::write!(fmt, "invalid moisture {}", value)
            }
        }
    }
}
