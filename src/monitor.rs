//! Per-Cycle Composition Over Owned Monitor State
//!
//! [`PlantMonitor`] ties the registry, engine, and history together for
//! one plant. It owns all mutable state explicitly — no globals — so
//! several independent monitors can coexist in one process and tests can
//! construct them freely.
//!
//! The monitor still performs no I/O and owns no timer: the embedding
//! firmware calls [`PlantMonitor::step`] once per sampling interval with
//! a stamped reading, drives its indicator line from the returned
//! command, and prints the observations however it likes. Environment
//! excursions (light or temperature outside the profile's band) are
//! logged here but never influence the actuation decision.

use crate::constants::DEFAULT_HISTORY_DEPTH;
use crate::decision::{Decision, DecisionEngine, Reading, WateringCommand};
use crate::errors::{MonitorError, MonitorResult};
use crate::history::{HistoryBuffer, SensorHistoryEntry};
use crate::profile::{PlantProfile, ProfileRegistry};

/// Decision state for a single plant
pub struct PlantMonitor<const N: usize = DEFAULT_HISTORY_DEPTH> {
    profile: PlantProfile,
    engine: DecisionEngine,
    history: HistoryBuffer<N>,
}

impl<const N: usize> PlantMonitor<N> {
    /// Create a monitor for the named plant
    ///
    /// The profile is resolved once, here; an unknown name fails with
    /// [`MonitorError::ProfileNotFound`] instead of being deferred to the
    /// first cycle.
    pub fn new(registry: &ProfileRegistry, plant: &str) -> MonitorResult<Self> {
        let profile = registry
            .lookup(plant)
            .copied()
            .ok_or(MonitorError::ProfileNotFound)?;

        Ok(Self {
            profile,
            engine: DecisionEngine::default(),
            history: HistoryBuffer::new(),
        })
    }

    /// Replace the default engine (custom scale or lookback)
    pub fn with_engine(mut self, engine: DecisionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// The resolved plant profile
    pub fn profile(&self) -> &PlantProfile {
        &self.profile
    }

    /// Read-only view of the recorded history
    pub fn history(&self) -> &HistoryBuffer<N> {
        &self.history
    }

    /// Run one decision cycle and record it
    ///
    /// Decides first, then appends, so the stored `action_taken` flag
    /// reflects the command actually produced for this cycle and the
    /// trend comparison never sees the cycle it is deciding.
    pub fn step(&mut self, reading: Reading) -> MonitorResult<Decision> {
        let decision = self.engine.decide(&self.profile, &reading, &self.history)?;

        if !self.profile.light_in_range(reading.light) {
            log::warn!(
                "{}: light {} lux outside [{}, {}]",
                self.profile.name,
                reading.light,
                self.profile.min_light,
                self.profile.max_light
            );
        }
        if !self.profile.temperature_in_range(reading.temperature) {
            log::warn!(
                "{}: temperature {} C outside [{}, {}]",
                self.profile.name,
                reading.temperature,
                self.profile.min_temp,
                self.profile.max_temp
            );
        }

        self.history.append(SensorHistoryEntry {
            timestamp: reading.timestamp,
            moisture: reading.moisture,
            light: reading.light,
            temperature: reading.temperature,
            action_taken: decision.command == WateringCommand::Enable,
        });

        Ok(decision)
    }
}
