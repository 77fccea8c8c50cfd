//! The dispatch desk: zone registry and history log owned together.
//!
//! Every mutation that needs to know whether a zone is completed goes through
//! here. Closure reads the log, appends to it and updates the zone in one
//! `&mut self` call, which keeps "at most one entry per zone" intact.

use crate::libs::history::{HistoryEntry, HistoryLog};
use crate::libs::status::{derive_status, displayed_remaining, DispatchStatus};
use crate::libs::zone::{DispatchZone, TargetTime, ZoneError, ZoneRegistry, ZoneUpdate};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// A new entry was prepended to the log.
    Closed(HistoryEntry),
    /// The zone was already in the log. Nothing was appended; the zone was forced inactive.
    AlreadyClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Activated,
    Deactivated,
    /// Completed zones keep their flag.
    Locked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Desk {
    registry: ZoneRegistry,
    history: HistoryLog,
}

impl Desk {
    pub fn new(registry: ZoneRegistry, history: HistoryLog) -> Self {
        Desk { registry, history }
    }

    pub fn from_parts(zones: Vec<DispatchZone>, entries: Vec<HistoryEntry>) -> Self {
        Desk::new(ZoneRegistry::new(zones), HistoryLog::new(entries))
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Direct registry access. Status stays derived from the log whatever is changed here.
    pub fn registry_mut(&mut self) -> &mut ZoneRegistry {
        &mut self.registry
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn zones(&self) -> &[DispatchZone] {
        self.registry.zones()
    }

    pub fn zone(&self, id: &str) -> Result<&DispatchZone, ZoneError> {
        self.registry.get(id).ok_or_else(|| ZoneError::NotFound(id.to_string()))
    }

    /// Full id of the zone matching `id` exactly or by unique prefix.
    pub fn resolve_id(&self, id: &str) -> Result<String, ZoneError> {
        self.registry.resolve(id).map(|zone| zone.id.clone())
    }

    pub fn status(&self, zone: &DispatchZone) -> DispatchStatus {
        derive_status(zone, &self.history)
    }

    pub fn displayed_remaining(&self, zone: &DispatchZone, now: NaiveDateTime) -> String {
        displayed_remaining(zone, &self.history, now)
    }

    pub fn add_zone(&mut self, name: &str, target_time: TargetTime) -> Result<DispatchZone, ZoneError> {
        let zone = self.registry.add(name, target_time)?;
        tracing::debug!(zone_id = %zone.id, name = %zone.name, target = %zone.target_time, "zone added");
        Ok(zone)
    }

    /// Edits a zone that has not been closed yet.
    pub fn edit_zone(&mut self, id: &str, update: ZoneUpdate) -> Result<DispatchZone, ZoneError> {
        let zone = self.zone(id)?;
        if self.history.contains_zone(&zone.id) {
            return Err(ZoneError::Completed(zone.name.clone()));
        }
        self.registry.edit(id, update)
    }

    /// Removes the zone from the panel. Its history entry, if any, stays.
    pub fn delete_zone(&mut self, id: &str) -> Result<DispatchZone, ZoneError> {
        let zone = self.registry.delete(id)?;
        tracing::debug!(zone_id = %zone.id, kept_in_history = self.history.contains_zone(&zone.id), "zone deleted");
        Ok(zone)
    }

    pub fn toggle_active(&mut self, id: &str) -> Result<ToggleOutcome, ZoneError> {
        let zone = self.zone(id)?;
        if self.status(zone) == DispatchStatus::Completed {
            return Ok(ToggleOutcome::Locked);
        }

        let is_active = !zone.is_active;
        self.registry.set_active(id, is_active)?;
        Ok(if is_active { ToggleOutcome::Activated } else { ToggleOutcome::Deactivated })
    }

    /// Saves the zone to history as of `now` and switches it off.
    ///
    /// A second call for the same zone appends nothing and only re-applies
    /// `is_active = false`.
    pub fn close(&mut self, id: &str, now: NaiveDateTime) -> Result<CloseOutcome, ZoneError> {
        let zone = self.zone(id)?;

        if self.history.contains_zone(&zone.id) {
            self.registry.set_active(id, false)?;
            tracing::debug!(zone_id = %id, "closure refused, zone already in history");
            return Ok(CloseOutcome::AlreadyClosed);
        }

        let entry = HistoryEntry::record(zone, now);
        self.history.prepend(entry.clone());
        self.registry.set_active(id, false)?;
        tracing::debug!(zone_id = %id, entry_id = %entry.id, registered = %entry.registered_time, "zone closed");

        Ok(CloseOutcome::Closed(entry))
    }
}
