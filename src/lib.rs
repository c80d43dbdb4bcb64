//! Decision and history core for a single-plant environmental monitor
//!
//! Ingests soil-moisture, light, and temperature readings, classifies the
//! moisture state, compares against the cycle recorded roughly one
//! lookback period earlier, and produces a watering-indicator command
//! plus diagnostic narration.
//!
//! Key constraints:
//! - No heap allocation anywhere in the decision path
//! - All state explicitly owned and passed by reference; no globals
//! - Single-threaded: one decision cycle runs to completion at a time
//!
//! Sensor acquisition, actuator I/O, console output, and the sampling
//! timer are the embedding firmware's job; this crate is pure computation
//! over in-memory state.
//!
//! ```
//! use plantguard_core::{PlantMonitor, ProfileRegistry, Reading, WateringCommand};
//!
//! let registry = ProfileRegistry::builtin();
//! let mut monitor: PlantMonitor = PlantMonitor::new(&registry, "Fern")?;
//!
//! let decision = monitor.step(Reading {
//!     moisture: 35.0,
//!     light: 300.0,
//!     temperature: 21.0,
//!     timestamp: 10_000,
//! })?;
//!
//! assert_eq!(decision.command, WateringCommand::Enable);
//! for observation in &decision.observations {
//!     // hand narration to the diagnostics sink
//!     let _ = observation.message();
//! }
//! # Ok::<(), plantguard_core::MonitorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod decision;
pub mod errors;
pub mod history;
pub mod moisture;
pub mod monitor;
pub mod profile;
pub mod time;

// Public API
pub use decision::{Decision, DecisionEngine, Observation, Reading, WateringCommand};
pub use errors::{MonitorError, MonitorResult};
pub use history::{HistoryBuffer, SensorHistoryEntry};
pub use moisture::{MoistureLevel, MoistureScale};
pub use monitor::PlantMonitor;
pub use profile::{PlantProfile, ProfileRegistry, BUILTIN_PROFILES};

pub use time::Timestamp;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
