//! Ordering of the dispatch panel.
//!
//! Two of the four sort keys are derived values: `status` sorts by
//! [`DispatchStatus::rank`] and `remaining-time` sorts by the same remaining
//! time the panel displays, converted to seconds. `name` and `target-time`
//! compare the text fields as written.
//!
//! The sort is stable and the direction only flips the comparison, so zones
//! that compare equal keep their registry order in both directions.

use crate::libs::history::HistoryLog;
use crate::libs::status::{derive_status, sortable_remaining};
use crate::libs::zone::DispatchZone;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Name,
    TargetTime,
    Status,
    RemainingTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            key: SortKey::Status,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortConfig { key, direction }
    }

    /// Column header click: the active ascending key flips to descending,
    /// anything else starts ascending.
    pub fn request(&mut self, key: SortKey) {
        self.direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = key;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Text(String),
    Number(u64),
}

fn sort_value(zone: &DispatchZone, history: &HistoryLog, key: SortKey, now: NaiveDateTime) -> SortValue {
    match key {
        SortKey::Name => SortValue::Text(zone.name.clone()),
        SortKey::TargetTime => SortValue::Text(zone.target_time.to_string()),
        SortKey::Status => SortValue::Number(u64::from(derive_status(zone, history).rank())),
        SortKey::RemainingTime => SortValue::Number(sortable_remaining(zone, history, now)),
    }
}

/// Returns the zones in panel order. Sort values are computed once per zone.
pub fn sort_zones<'a>(zones: &'a [DispatchZone], history: &HistoryLog, config: SortConfig, now: NaiveDateTime) -> Vec<&'a DispatchZone> {
    let mut keyed: Vec<(SortValue, &DispatchZone)> = zones.iter().map(|zone| (sort_value(zone, history, config.key, now), zone)).collect();

    keyed.sort_by(|(a, _), (b, _)| config.direction.apply(a.cmp(b)));

    keyed.into_iter().map(|(_, zone)| zone).collect()
}
