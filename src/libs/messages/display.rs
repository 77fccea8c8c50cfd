//! Display implementation for zonal application messages.
//!
//! All message text is defined here so the command layer only ever names a
//! [`Message`] variant. Status labels and CSV headers are domain data and live
//! with their types instead.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ZONE MESSAGES ===
            Message::ZoneCreated(name) => format!("Zone '{}' created", name),
            Message::ZoneUpdated(name) => format!("Zone '{}' updated", name),
            Message::ZoneDeleted(name) => format!("Zone '{}' removed from the panel (history is kept)", name),
            Message::ZoneActivated(name) => format!("Zone '{}' marked active", name),
            Message::ZoneDeactivated(name) => format!("Zone '{}' marked inactive", name),
            Message::ZoneLockedCompleted(name) => format!("Zone '{}' is completed (in history) and cannot be reactivated", name),
            Message::ZoneEditCompleted(name) => format!("Zone '{}' is completed (in history) and cannot be edited", name),
            Message::ZoneNotFound(id) => format!("No zone found with id '{}'", id),
            Message::ZoneIdAmbiguous(prefix, matches) => format!("Id prefix '{}' matches {} zones, use more characters", prefix, matches),
            Message::ZoneNameEmpty => "Zone name must not be empty".to_string(),
            Message::InvalidTargetTime(value) => format!("Invalid target time '{}', expected HH:MM", value),
            Message::NoZonesYet => "No dispatch zones yet. Use `zonal add` to create one.".to_string(),
            Message::ConfirmDeleteZone(name) => format!("Remove zone '{}' from the panel?", name),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === CLOSURE MESSAGES ===
            Message::ZoneClosed { name, registered_time } => {
                format!("Zone '{}' saved to history with remaining time {}", name, registered_time)
            }
            Message::ZoneAlreadyClosed(name) => format!("Zone '{}' has already been saved to history", name),

            // === PANEL MESSAGES ===
            Message::PanelHeader(clock) => format!("Dispatch panel - {}", clock),
            Message::WatchStarted(interval) => format!("Refreshing every {} ms, press Ctrl-C to stop", interval),
            Message::WatchStopped => "Watch stopped".to_string(),
            Message::WatchCtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader => "Dispatch history".to_string(),
            Message::HistoryEmpty => "The dispatch history is empty.".to_string(),
            Message::KpiHeader => "KPI: on-time departures".to_string(),
            Message::KpiNoData => "No closures recorded yet, nothing to report.".to_string(),
            Message::KpiSummary { on_time, late, total } => {
                format!("On time: {}  Late: {}  Total: {}", on_time, late, total)
            }
            Message::KpiPercentage(percentage) => format!("Schedule compliance: {}%", percentage),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("History exported to {}", path),
            Message::ExportEmptyHistory => "There is no history data to export.".to_string(),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === STORAGE MESSAGES ===
            Message::StoreOpenFailed(error) => format!("Failed to open the data store: {}", error),
            Message::StoreFallbackInMemory => "Changes in this session will not be saved".to_string(),
            Message::StoreSaveFailed => "Failed to save changes to the data store".to_string(),
            Message::StoreLoadFailed(key, error) => format!("Stored data '{}' could not be read, starting empty: {}", key, error),
            Message::StoreBlobBackedUp(backup_key) => format!("The unreadable data was kept under '{}'", backup_key),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults are in effect".to_string(),
            Message::ConfigModuleDashboard => "Dashboard".to_string(),
            Message::ConfigModuleExport => "Export".to_string(),

            // === PROMPTS ===
            Message::PromptZoneName => "Zone name".to_string(),
            Message::PromptTargetTime => "Target time (HH:MM)".to_string(),
            Message::PromptTickInterval => "Refresh interval (milliseconds)".to_string(),
            Message::PromptSortKey => "Default sort column".to_string(),
            Message::PromptSortDirection => "Default sort direction".to_string(),
            Message::PromptExportFileName => "Default CSV file name".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
        };
        write!(f, "{}", text)
    }
}
