//! Rule-Based Watering Decision Engine
//!
//! ## Overview
//!
//! One decision cycle fuses three inputs: the current reading, the active
//! plant profile, and the history entry nearest to one lookback period
//! ago. The output is a [`Decision`] — a binary actuation command, the
//! classified moisture level, and an ordered list of narrative
//! observations. The engine is pure: no I/O, no clocks, no mutation of
//! the history it borrows. Feeding the command to an indicator line and
//! the observations to a console belongs to the embedding firmware.
//!
//! ## Decision Rules
//!
//! Threshold check against the profile's moisture band:
//!
//! ```text
//! moisture < min  →  Enable,  "moisture too low"
//! moisture > max  →  Disable, "moisture too high"
//! otherwise       →  Disable, no observation
//! ```
//!
//! Trend check against the entry nearest `timestamp - lookback`, skipped
//! when that past cycle already signaled an actuation (an increase after
//! watering is expected, not informative):
//!
//! ```text
//! past < current  →  "increase looks normal"
//! past > current  →  "unusual moisture drop detected"
//! past == current →  nothing
//! ```
//!
//! An empty history is not an error at this level: the trend check is
//! skipped and the threshold-only decision stands.

use crate::constants::{MAX_OBSERVATIONS, MOISTURE_MAX_PCT, MOISTURE_MIN_PCT, MS_PER_DAY};
use crate::errors::{MonitorError, MonitorResult};
use crate::history::HistoryBuffer;
use crate::moisture::{MoistureLevel, MoistureScale};
use crate::profile::PlantProfile;
use crate::time::Timestamp;

use core::fmt;

/// Binary actuation state for the watering indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WateringCommand {
    /// Drive the indicator on: watering is advised
    Enable,
    /// Drive the indicator off
    Disable,
}

/// One sensor sample handed to the engine by the sampling loop
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Soil moisture, percent, expected in [0, 100]
    pub moisture: f32,
    /// Light level, lux
    pub light: f32,
    /// Temperature, °C
    pub temperature: f32,
    /// Caller-supplied monotonic timestamp
    pub timestamp: Timestamp,
}

/// Narrative observation attached to a decision
///
/// Variants carry no data; the message text is fixed so diagnostics stay
/// heap-free. Display order within a decision is threshold observation
/// first, then trend observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observation {
    /// Current moisture is below the profile minimum
    MoistureTooLow,
    /// Current moisture is above the profile maximum
    MoistureTooHigh,
    /// Moisture rose since the comparison cycle without an actuation
    NormalIncrease,
    /// Moisture fell since the comparison cycle without an actuation
    UnusualDrop,
}

impl Observation {
    /// Fixed diagnostic message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MoistureTooLow => "moisture too low, consider watering",
            Self::MoistureTooHigh => "moisture too high, reduce watering",
            Self::NormalIncrease => "moisture increase looks normal",
            Self::UnusualDrop => "unusual moisture drop detected",
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Output of one decision cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Actuation command for the watering indicator
    pub command: WateringCommand,
    /// Classified level of the current moisture reading
    pub level: MoistureLevel,
    /// Ordered narration, threshold observation before trend observation
    pub observations: heapless::Vec<Observation, MAX_OBSERVATIONS>,
}

impl Decision {
    /// Whether the decision carries a given observation
    pub fn observed(&self, observation: Observation) -> bool {
        self.observations.contains(&observation)
    }
}

/// The rule engine: moisture scale plus trend lookback period
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine {
    scale: MoistureScale,
    lookback: u64,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self {
            scale: MoistureScale::default(),
            lookback: MS_PER_DAY,
        }
    }
}

impl DecisionEngine {
    /// Engine with a custom scale and lookback period
    ///
    /// The lookback shares the caller's timestamp unit, whatever that is.
    pub fn new(scale: MoistureScale, lookback: u64) -> Self {
        Self { scale, lookback }
    }

    /// The configured trend lookback period
    pub fn lookback(&self) -> u64 {
        self.lookback
    }

    /// Run one decision cycle
    ///
    /// Borrows the history read-only; appending the current reading is
    /// the caller's business (see [`crate::monitor::PlantMonitor`]).
    ///
    /// Fails with [`MonitorError::InvalidReading`] when the moisture
    /// percentage is NaN or outside [0, 100]. An empty history is
    /// tolerated: the trend check is skipped.
    pub fn decide<const N: usize>(
        &self,
        profile: &PlantProfile,
        reading: &Reading,
        history: &HistoryBuffer<N>,
    ) -> MonitorResult<Decision> {
        if !reading.moisture.is_finite()
            || reading.moisture < MOISTURE_MIN_PCT
            || reading.moisture > MOISTURE_MAX_PCT
        {
            return Err(MonitorError::InvalidReading {
                value: reading.moisture,
            });
        }

        let level = self.scale.classify(reading.moisture);
        let mut observations = heapless::Vec::new();

        let command = if reading.moisture < profile.min_moisture {
            let _ = observations.push(Observation::MoistureTooLow);
            WateringCommand::Enable
        } else if reading.moisture > profile.max_moisture {
            let _ = observations.push(Observation::MoistureTooHigh);
            WateringCommand::Disable
        } else {
            WateringCommand::Disable
        };

        let target = reading.timestamp.saturating_sub(self.lookback);
        match history.closest(target) {
            Ok(past) => {
                if !past.action_taken {
                    if past.moisture < reading.moisture {
                        let _ = observations.push(Observation::NormalIncrease);
                    } else if past.moisture > reading.moisture {
                        let _ = observations.push(Observation::UnusualDrop);
                    }
                }
            }
            Err(MonitorError::HistoryUnavailable) => {
                log::debug!("no history yet, skipping trend comparison");
            }
            Err(e) => return Err(e),
        }

        Ok(Decision {
            command,
            level,
            observations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::SensorHistoryEntry;
    use crate::profile::ProfileRegistry;

    const DAY: u64 = MS_PER_DAY;

    fn fern() -> PlantProfile {
        *ProfileRegistry::builtin().lookup("Fern").unwrap()
    }

    fn reading(moisture: f32, timestamp: Timestamp) -> Reading {
        Reading {
            moisture,
            light: 300.0,
            temperature: 21.0,
            timestamp,
        }
    }

    fn past_entry(moisture: f32, timestamp: Timestamp, action_taken: bool) -> SensorHistoryEntry {
        SensorHistoryEntry {
            timestamp,
            moisture,
            light: 300.0,
            temperature: 21.0,
            action_taken,
        }
    }

    #[test]
    fn low_moisture_enables_indicator() {
        let engine = DecisionEngine::default();
        let history = HistoryBuffer::<20>::new();

        let decision = engine
            .decide(&fern(), &reading(35.0, DAY), &history)
            .unwrap();

        assert_eq!(decision.command, WateringCommand::Enable);
        assert!(decision.observed(Observation::MoistureTooLow));
    }

    #[test]
    fn in_band_moisture_is_quiet() {
        let engine = DecisionEngine::default();
        let history = HistoryBuffer::<20>::new();

        let decision = engine
            .decide(&fern(), &reading(50.0, DAY), &history)
            .unwrap();

        assert_eq!(decision.command, WateringCommand::Disable);
        assert!(!decision.observed(Observation::MoistureTooLow));
        assert!(!decision.observed(Observation::MoistureTooHigh));
    }

    #[test]
    fn high_moisture_disables_with_observation() {
        let engine = DecisionEngine::default();
        let history = HistoryBuffer::<20>::new();

        let decision = engine
            .decide(&fern(), &reading(70.0, DAY), &history)
            .unwrap();

        assert_eq!(decision.command, WateringCommand::Disable);
        assert!(decision.observed(Observation::MoistureTooHigh));
    }

    #[test]
    fn increase_without_past_action_is_normal() {
        let engine = DecisionEngine::default();
        let mut history = HistoryBuffer::<20>::new();
        history.append(past_entry(30.0, 0, false));

        let decision = engine
            .decide(&fern(), &reading(50.0, DAY), &history)
            .unwrap();

        assert!(decision.observed(Observation::NormalIncrease));
        assert!(!decision.observed(Observation::UnusualDrop));
    }

    #[test]
    fn drop_without_past_action_is_unusual() {
        let engine = DecisionEngine::default();
        let mut history = HistoryBuffer::<20>::new();
        history.append(past_entry(70.0, 0, false));

        let decision = engine
            .decide(&fern(), &reading(50.0, DAY), &history)
            .unwrap();

        assert!(decision.observed(Observation::UnusualDrop));
    }

    #[test]
    fn past_actuation_suppresses_trend() {
        let engine = DecisionEngine::default();
        let mut history = HistoryBuffer::<20>::new();
        history.append(past_entry(30.0, 0, true));

        let decision = engine
            .decide(&fern(), &reading(50.0, DAY), &history)
            .unwrap();

        assert!(!decision.observed(Observation::NormalIncrease));
        assert!(!decision.observed(Observation::UnusualDrop));
    }

    #[test]
    fn equal_moisture_emits_no_trend() {
        let engine = DecisionEngine::default();
        let mut history = HistoryBuffer::<20>::new();
        history.append(past_entry(50.0, 0, false));

        let decision = engine
            .decide(&fern(), &reading(50.0, DAY), &history)
            .unwrap();

        assert!(decision.observations.is_empty());
    }

    #[test]
    fn empty_history_still_decides() {
        let engine = DecisionEngine::default();
        let history = HistoryBuffer::<20>::new();

        let decision = engine
            .decide(&fern(), &reading(35.0, 500), &history)
            .unwrap();

        assert_eq!(decision.command, WateringCommand::Enable);
        assert!(decision.observed(Observation::MoistureTooLow));
        assert_eq!(decision.observations.len(), 1);
    }

    #[test]
    fn observation_order_is_threshold_then_trend() {
        let engine = DecisionEngine::default();
        let mut history = HistoryBuffer::<20>::new();
        history.append(past_entry(10.0, 0, false));

        let decision = engine
            .decide(&fern(), &reading(35.0, DAY), &history)
            .unwrap();

        assert_eq!(
            &decision.observations[..],
            &[Observation::MoistureTooLow, Observation::NormalIncrease]
        );
    }

    #[test]
    fn rejects_out_of_domain_moisture() {
        let engine = DecisionEngine::default();
        let history = HistoryBuffer::<20>::new();

        for bad in [-1.0, 101.0, f32::NAN, f32::INFINITY] {
            let result = engine.decide(&fern(), &reading(bad, DAY), &history);
            assert!(matches!(
                result,
                Err(MonitorError::InvalidReading { .. })
            ));
        }
    }

    #[test]
    fn lookback_saturates_near_zero() {
        // Timestamp smaller than the lookback must not underflow; the
        // oldest entry becomes the comparison point
        let engine = DecisionEngine::default();
        let mut history = HistoryBuffer::<20>::new();
        history.append(past_entry(30.0, 0, false));
        history.append(past_entry(45.0, 10, false));

        let decision = engine
            .decide(&fern(), &reading(50.0, 20), &history)
            .unwrap();

        assert!(decision.observed(Observation::NormalIncrease));
    }
}
