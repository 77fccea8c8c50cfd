//! Rows of the dispatch panel, ready to render.
//!
//! Ties the sort engine and the status engine together so the one-shot panel
//! and the live watch view show exactly the same thing for the same instant.

use crate::libs::countdown::ZERO_REMAINING;
use crate::libs::desk::Desk;
use crate::libs::sort::{sort_zones, SortConfig};
use crate::libs::status::DispatchStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub id: String,
    pub name: String,
    pub target_time: String,
    pub remaining: String,
    pub status: DispatchStatus,
    pub is_active: bool,
}

impl PanelRow {
    /// In progress with nothing left on the clock.
    pub fn is_overdue(&self) -> bool {
        self.status == DispatchStatus::InProgress && self.remaining == ZERO_REMAINING
    }

    /// First block of the id, enough to address the zone from the command line.
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }
}

pub fn panel_rows(desk: &Desk, sort: SortConfig, now: NaiveDateTime) -> Vec<PanelRow> {
    sort_zones(desk.zones(), desk.history(), sort, now)
        .into_iter()
        .map(|zone| PanelRow {
            id: zone.id.clone(),
            name: zone.name.clone(),
            target_time: zone.target_time.to_string(),
            remaining: desk.displayed_remaining(zone, now),
            status: desk.status(zone),
            is_active: zone.is_active,
        })
        .collect()
}
