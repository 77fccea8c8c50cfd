//! Status derivation for dispatch zones.
//!
//! Status is never stored: it is derived from the zone and the history log
//! every time it is needed. The checks run in a fixed order because a history
//! entry must win over the `is_active` flag:
//!
//! 1. an entry references the zone: **Completed**
//! 2. the zone is switched off: **Inactive**
//! 3. otherwise: **In progress**
//!
//! A passed deadline does not complete a zone. Only closure does.

use crate::libs::countdown::{countdown, remaining_seconds, ZERO_REMAINING};
use crate::libs::history::HistoryLog;
use crate::libs::zone::DispatchZone;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DispatchStatus {
    InProgress,
    Completed,
    Inactive,
}

impl DispatchStatus {
    /// Position used by the status sort: in progress first, inactive last.
    pub fn rank(self) -> u8 {
        match self {
            DispatchStatus::InProgress => 1,
            DispatchStatus::Completed => 2,
            DispatchStatus::Inactive => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DispatchStatus::InProgress => "En progreso",
            DispatchStatus::Completed => "Completado",
            DispatchStatus::Inactive => "Inactivo",
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn derive_status(zone: &DispatchZone, history: &HistoryLog) -> DispatchStatus {
    if history.contains_zone(&zone.id) {
        return DispatchStatus::Completed;
    }
    if !zone.is_active {
        return DispatchStatus::Inactive;
    }
    DispatchStatus::InProgress
}

/// Remaining time shown for a zone.
///
/// Completed zones show the value frozen in their history entry, inactive zones
/// show zero, and only zones in progress tick with the clock.
pub fn displayed_remaining(zone: &DispatchZone, history: &HistoryLog, now: NaiveDateTime) -> String {
    match derive_status(zone, history) {
        DispatchStatus::Completed => history
            .find_by_zone(&zone.id)
            .map(|entry| entry.registered_time.clone())
            .unwrap_or_else(|| ZERO_REMAINING.to_string()),
        DispatchStatus::Inactive => ZERO_REMAINING.to_string(),
        DispatchStatus::InProgress => countdown(zone.target_time, now).to_string(),
    }
}

/// Remaining time as a number of seconds, for sorting.
pub fn sortable_remaining(zone: &DispatchZone, history: &HistoryLog, now: NaiveDateTime) -> u64 {
    match derive_status(zone, history) {
        DispatchStatus::InProgress => countdown(zone.target_time, now).seconds(),
        _ => remaining_seconds(&displayed_remaining(zone, history, now)),
    }
}
