//! On-time KPI over the history log.
//!
//! An entry is on time when it was closed with time still on the clock, that is
//! its frozen remaining time is neither empty nor exactly `00:00:00`. A zone
//! closed at the exact second of its deadline therefore counts as late.
//!
//! ```text
//! on_time_percentage = round(on_time / total * 100, 1 decimal)
//! ```

use crate::libs::countdown::ZERO_REMAINING;
use crate::libs::history::{HistoryEntry, HistoryLog};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KpiReport {
    pub on_time_count: usize,
    pub late_count: usize,
    pub on_time_percentage: f64,
    pub total_count: usize,
}

impl KpiReport {
    pub fn from_history(history: &HistoryLog) -> Self {
        Self::from_entries(history.entries())
    }

    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let total_count = entries.len();
        if total_count == 0 {
            return KpiReport::default();
        }

        let on_time_count = entries.iter().filter(|e| is_on_time(e)).count();
        let percentage = on_time_count as f64 / total_count as f64 * 100.0;

        KpiReport {
            on_time_count,
            late_count: total_count - on_time_count,
            on_time_percentage: (percentage * 10.0).round() / 10.0,
            total_count,
        }
    }

    /// `false` for an empty log; the view shows a no-data notice instead of numbers.
    pub fn has_data(&self) -> bool {
        self.total_count > 0
    }
}

pub fn is_on_time(entry: &HistoryEntry) -> bool {
    !entry.registered_time.is_empty() && entry.registered_time != ZERO_REMAINING
}
