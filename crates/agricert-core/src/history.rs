//! Bounded in-memory history of recent readings.
//!
//! Append-only at the tail; when the buffer is full, each new append
//! evicts the oldest entry. Data is ephemeral and regenerated every
//! cycle, so nothing is persisted.

use std::collections::VecDeque;

use agricert_types::SoilReading;

/// Number of readings retained.
pub const HISTORY_CAPACITY: usize = 30;

/// Fixed-capacity, oldest-evicted buffer of recent readings.
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    entries: VecDeque<SoilReading>,
}

impl ReadingHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a reading, evicting the oldest entry when full.
    pub fn push(&mut self, reading: SoilReading) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(reading);
    }

    /// The most recent reading, if any.
    pub fn latest(&self) -> Option<&SoilReading> {
        self.entries.back()
    }

    /// All retained readings, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SoilReading> {
        self.entries.iter().copied().collect()
    }

    /// Number of retained readings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no readings yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::new()
    }
}
