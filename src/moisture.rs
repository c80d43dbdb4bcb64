//! Ordinal Moisture Classification
//!
//! ## Overview
//!
//! Maps a continuous soil-moisture percentage onto a small ordered set of
//! discrete levels using an ascending boundary table. Classification is
//! stateless and recomputed on every query; the scale itself is the only
//! configuration.
//!
//! ## Boundary Semantics
//!
//! Each boundary is an inclusive lower bound for its level:
//!
//! ```text
//! boundaries: [0.0,        30.0,        60.0]
//! levels:     [Dry,        Moderate,    Wet ]
//!
//! value:   0.0 ──────── 29.9 │ 30.0 ─── 59.9 │ 60.0 ────── 100.0
//! level:        Dry           │    Moderate   │      Wet
//! ```
//!
//! The search finds the *largest* boundary `<= value`, continuing
//! rightward on equality so a value sitting exactly on a boundary takes
//! that boundary's level. Values below the first boundary classify as the
//! first level, making [`MoistureScale::classify`] total — the reference
//! firmware returned an out-of-range index `-1` for that case, which this
//! implementation deliberately does not reproduce. With the default scale
//! the first boundary is `0.0` and moisture percentages are non-negative,
//! so the fallback is unreachable in practice.

use crate::constants::{MOISTURE_MIN_PCT, MOISTURE_MODERATE_PCT, MOISTURE_WET_PCT};

/// Number of discrete moisture levels
pub const MOISTURE_LEVELS: usize = 3;

/// Ordinal moisture classification, driest first
///
/// Derives `Ord` so levels compare by dryness: `Dry < Moderate < Wet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MoistureLevel {
    /// Below the moderate boundary
    Dry = 0,
    /// Between the moderate and wet boundaries
    Moderate = 1,
    /// At or above the wet boundary
    Wet = 2,
}

impl MoistureLevel {
    const ALL: [Self; MOISTURE_LEVELS] = [Self::Dry, Self::Moderate, Self::Wet];

    /// Human-readable name for diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Moderate => "moderate",
            Self::Wet => "wet",
        }
    }
}

/// Ascending boundary table mapping moisture percentages to levels
///
/// `boundaries[i]` is the inclusive lower bound of `MoistureLevel::ALL[i]`.
#[derive(Debug, Clone, Copy)]
pub struct MoistureScale {
    boundaries: [f32; MOISTURE_LEVELS],
}

impl Default for MoistureScale {
    fn default() -> Self {
        Self {
            boundaries: [MOISTURE_MIN_PCT, MOISTURE_MODERATE_PCT, MOISTURE_WET_PCT],
        }
    }
}

impl MoistureScale {
    /// Create a scale from ascending boundaries
    ///
    /// Boundaries must be strictly ascending; out-of-order tables are
    /// normalized by sorting so classification stays coherent.
    pub fn new(mut boundaries: [f32; MOISTURE_LEVELS]) -> Self {
        // Insertion sort: three elements, no allocator
        for i in 1..MOISTURE_LEVELS {
            let mut j = i;
            while j > 0 && boundaries[j - 1] > boundaries[j] {
                boundaries.swap(j - 1, j);
                j -= 1;
            }
        }
        Self { boundaries }
    }

    /// Classify a moisture percentage
    ///
    /// Binary search for the largest boundary `<= value`. Equality moves
    /// the search right, so boundaries are inclusive lower bounds.
    pub fn classify(&self, value: f32) -> MoistureLevel {
        let mut low = 0usize;
        let mut high = MOISTURE_LEVELS; // exclusive
        let mut best = 0usize;

        while low < high {
            let mid = (low + high) / 2;
            if value >= self.boundaries[mid] {
                best = mid;
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        MoistureLevel::ALL[best]
    }

    /// The boundary table, ascending
    pub fn boundaries(&self) -> &[f32; MOISTURE_LEVELS] {
        &self.boundaries
    }
}
