//! Append-only log of zone closures.
//!
//! Entries copy the zone's name and target time at the moment of closure and
//! freeze the countdown value, so later edits or deletion of the zone never
//! change what the log says. Nothing in this crate removes or rewrites an entry.

use crate::libs::countdown::countdown;
use crate::libs::formatter::{format_clock_time, format_date};
use crate::libs::zone::DispatchZone;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const REGISTERED_TIME_PLACEHOLDER: &str = "--:--:--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// Id of the zone this entry was created from. The zone may no longer exist.
    pub original_zone_id: String,
    pub zonal_name: String,
    /// Closure date, `DD-MM-YYYY`.
    pub date: String,
    /// Countdown at the instant of closure, `HH:MM:SS`.
    pub registered_time: String,
    /// Target time copied from the zone, `HH:MM`.
    pub target_time: String,
    /// Wall-clock time of closure, `HH:MM:SS`.
    pub saved_time: String,
}

impl HistoryEntry {
    /// Builds the closure record for `zone` as of `now`.
    ///
    /// The countdown is evaluated here and nowhere else: this is the value the
    /// KPI report will judge the zone by.
    pub fn record(zone: &DispatchZone, now: NaiveDateTime) -> Self {
        HistoryEntry {
            id: Uuid::new_v4().to_string(),
            original_zone_id: zone.id.clone(),
            zonal_name: zone.name.clone(),
            date: format_date(&now),
            registered_time: countdown(zone.target_time, now).to_string(),
            target_time: zone.target_time.to_string(),
            saved_time: format_clock_time(&now),
        }
    }

    /// Registered time for display; entries written without one show a placeholder.
    pub fn registered_time_display(&self) -> &str {
        if self.registered_time.is_empty() {
            REGISTERED_TIME_PLACEHOLDER
        } else {
            &self.registered_time
        }
    }
}

/// History entries, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        HistoryLog { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_zone(&self, zone_id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.original_zone_id == zone_id)
    }

    pub fn contains_zone(&self, zone_id: &str) -> bool {
        self.find_by_zone(zone_id).is_some()
    }

    pub(crate) fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
