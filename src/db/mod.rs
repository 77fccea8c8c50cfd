//! Persistence layer for the zonal application.
//!
//! Built on SQLite through `rusqlite`. The schema is a single key-value table:
//! the zone collection and the history log are each stored as one JSON blob,
//! loaded at the start of a command and rewritten after every mutation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonal::db::store::{Store, ZONES_KEY};
//! use zonal::libs::zone::DispatchZone;
//!
//! let store = Store::new()?;
//! let zones: Vec<DispatchZone> = store.load(ZONES_KEY);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Database connection management.
pub mod db;

/// Key-value blob store holding the zone collection and the history log.
pub mod store;
