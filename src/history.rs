//! Fixed-Capacity Circular History of Sensor Readings
//!
//! ## Overview
//!
//! The monitor keeps a short sliding window of past decision cycles so
//! the decision engine can compare the present reading against "roughly
//! one lookback ago". The window is a ring buffer with a fixed,
//! compile-time capacity: appends are O(1), the oldest entry is silently
//! overwritten once full, and nothing ever allocates. Overwriting is the
//! retention policy, not a failure mode — recent cycles are worth more
//! than old ones.
//!
//! ## Memory Layout
//!
//! Storage is an array of `Option<SensorHistoryEntry>` plus a write
//! cursor and fill count:
//!
//! ```text
//! HistoryBuffer<5> after 7 appends (A..G):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  F  │  G  │  C  │  D  │  E  │   ← physical slots
//! └─────┴─────┴─────┴─────┴─────┘
//!               ↑
//!               write_pos = 2 (oldest live entry)
//!
//! Logical (chronological) view: [C, D, E, F, G]
//! ```
//!
//! `Option` keeps the implementation free of `unsafe`; the discriminant
//! cost is a few bytes per slot, acceptable at this capacity.
//!
//! ## Nearest-Timestamp Queries
//!
//! [`HistoryBuffer::closest`] answers "which recorded cycle is nearest to
//! this instant". The reference firmware binary-searched the raw slot
//! array here, which is only correct while slot order equals time order —
//! false as soon as the cursor wraps (see the layout above: slot 0 holds
//! a newer entry than slot 4). At 20 entries a linear scan with a running
//! best-difference is both correct and effectively free, so that is what
//! this implementation does. Ties go to the first (oldest) candidate
//! because only a strictly smaller difference displaces the best match.

use crate::errors::{MonitorError, MonitorResult};
use crate::time::Timestamp;

/// One recorded decision cycle
///
/// Immutable once appended; replaced wholesale when its slot is
/// overwritten.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorHistoryEntry {
    /// Caller-supplied monotonic timestamp of the cycle
    pub timestamp: Timestamp,
    /// Soil moisture, percent
    pub moisture: f32,
    /// Light level, lux
    pub light: f32,
    /// Temperature, °C
    pub temperature: f32,
    /// Whether the cycle signaled the watering indicator
    pub action_taken: bool,
}

/// Fixed-capacity overwrite-oldest ring of history entries
///
/// ## Invariants
///
/// - `write_pos < N` and `len <= N` always hold.
/// - Callers append in nondecreasing timestamp order; the buffer does not
///   enforce this, but [`Self::closest`] and the iterator's chronological
///   ordering assume it within the live window.
///
/// Not thread-safe. The monitor core is single-threaded by design; wrap
/// the buffer in a mutex if a port ever samples from another thread, and
/// hold the lock across the whole append-then-query sequence.
#[derive(Clone)]
pub struct HistoryBuffer<const N: usize> {
    /// `None` until a slot has been written at least once
    slots: [Option<SensorHistoryEntry>; N],
    /// Next slot to overwrite, wraps modulo N
    write_pos: usize,
    /// Live entry count, saturates at N
    len: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    /// Create an empty buffer
    ///
    /// `const`, so a buffer can live in a `static` on targets that want
    /// it placed at link time.
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Record one cycle, overwriting the oldest entry when full
    pub fn append(&mut self, entry: SensorHistoryEntry) {
        self.slots[self.write_pos] = Some(entry);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entry has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot holds a live entry
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Most recently appended entry
    pub fn last(&self) -> Option<&SensorHistoryEntry> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 {
            N - 1
        } else {
            self.write_pos - 1
        };

        self.slots[idx].as_ref()
    }

    /// Forget all entries; capacity is untouched
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Entry whose timestamp is nearest `target`, by absolute difference
    ///
    /// Linear scan over the live window tracking the running minimum;
    /// only a strictly smaller difference displaces the current best, so
    /// ties resolve to the first (oldest) candidate. A `target` earlier
    /// than every entry resolves to the oldest entry, later than every
    /// entry to the newest.
    ///
    /// Fails with [`MonitorError::HistoryUnavailable`] on an empty
    /// buffer.
    pub fn closest(&self, target: Timestamp) -> MonitorResult<&SensorHistoryEntry> {
        let mut best: Option<(&SensorHistoryEntry, u64)> = None;

        for entry in self.iter() {
            let diff = entry.timestamp.abs_diff(target);
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((entry, diff)),
            }
        }

        best.map(|(entry, _)| entry)
            .ok_or(MonitorError::HistoryUnavailable)
    }

    /// Iterate entries oldest to newest
    pub fn iter(&self) -> HistoryIter<'_, N> {
        HistoryIter {
            buffer: self,
            index: 0,
        }
    }

    /// Entry by logical index (0 = oldest, len-1 = newest)
    ///
    /// Translates the chronological index to a physical slot: while the
    /// buffer is filling they coincide; once full, the oldest entry sits
    /// at `write_pos` and everything shifts by that offset, modulo N.
    fn get(&self, index: usize) -> Option<&SensorHistoryEntry> {
        if index >= self.len {
            return None;
        }

        let slot = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.slots[slot].as_ref()
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Chronological iterator over a [`HistoryBuffer`]
pub struct HistoryIter<'a, const N: usize> {
    buffer: &'a HistoryBuffer<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for HistoryIter<'a, N> {
    type Item = &'a SensorHistoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}
