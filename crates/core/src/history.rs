//! Bounded per-reading value history for trend charts.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::Timestamp;
use crate::vitals::{Reading, VitalStatus};

/// Samples kept per reading unless configured otherwise. One hour at the
/// default five second tick.
pub const DEFAULT_HISTORY_CAPACITY: usize = 720;

/// One recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub timestamp: Timestamp,
    pub value: f64,
    pub status: VitalStatus,
}

impl HistoryPoint {
    pub fn of(reading: &Reading) -> Self {
        Self {
            timestamp: reading.timestamp,
            value: reading.value(),
            status: reading.status(),
        }
    }
}

/// Ring of the most recent samples of one reading, oldest first.
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl ReadingHistory {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once full.
    pub fn push(&mut self, point: HistoryPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The newest `limit` samples (all when `None`), oldest first.
    pub fn latest(&self, limit: Option<usize>) -> Vec<HistoryPoint> {
        let skip = limit.map_or(0, |n| self.points.len().saturating_sub(n));
        self.points.iter().skip(skip).copied().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
