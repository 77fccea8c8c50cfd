//! Message catalogue for every user-facing string in zonal.
//!
//! Each variant maps to exactly one piece of text in [`super::display`]. Variants
//! carry the dynamic parts (names, ids, paths) so the wording lives in one place.

#[derive(Debug, Clone)]
pub enum Message {
    // === ZONE MESSAGES ===
    ZoneCreated(String), // name
    ZoneUpdated(String), // name
    ZoneDeleted(String), // name
    ZoneActivated(String), // name
    ZoneDeactivated(String), // name
    ZoneLockedCompleted(String), // name
    ZoneEditCompleted(String), // name
    ZoneNotFound(String), // id
    ZoneIdAmbiguous(String, usize), // prefix, matches
    ZoneNameEmpty,
    InvalidTargetTime(String),
    NoZonesYet,
    ConfirmDeleteZone(String), // name
    NoChangesDetected,

    // === CLOSURE MESSAGES ===
    ZoneClosed {
        name: String,
        registered_time: String,
    },
    ZoneAlreadyClosed(String), // name

    // === PANEL MESSAGES ===
    PanelHeader(String), // formatted clock
    WatchStarted(u64), // tick interval ms
    WatchStopped,
    WatchCtrlCListenFailed(String),

    // === HISTORY MESSAGES ===
    HistoryHeader,
    HistoryEmpty,
    KpiHeader,
    KpiNoData,
    KpiSummary {
        on_time: usize,
        late: usize,
        total: usize,
    },
    KpiPercentage(f64),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportEmptyHistory,
    ExportFailed(String),

    // === STORAGE MESSAGES ===
    StoreOpenFailed(String),
    StoreFallbackInMemory,
    StoreSaveFailed,
    StoreLoadFailed(String, String), // key, error
    StoreBlobBackedUp(String), // backup key

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDashboard,
    ConfigModuleExport,

    // === PROMPTS ===
    PromptZoneName,
    PromptTargetTime,
    PromptTickInterval,
    PromptSortKey,
    PromptSortDirection,
    PromptExportFileName,
    PromptSelectModules,
}
