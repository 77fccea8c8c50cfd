//! Key-value blob store for the zone collection and the history log.
//!
//! Each collection is stored whole, as one JSON document under its own key, and
//! rewritten in full on every save. The store never takes the session down:
//!
//! - a missing key or an unreadable document loads as an empty collection,
//!   and an unreadable document is kept under a backup key
//! - a failed save is logged and the in-memory state stays authoritative
//! - if the database file cannot be opened, the session runs on an in-memory
//!   database and nothing is persisted
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonal::db::store::Store;
//!
//! let store = Store::new()?;
//! let mut desk = store.load_desk();
//! // ... mutate the desk ...
//! store.save_desk(&desk);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::desk::Desk;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

pub const ZONES_KEY: &str = "cialDispatchZones";
pub const HISTORY_KEY: &str = "cialDispatchHistory";

/// Key an unreadable blob stored under `key` is moved aside to.
pub fn backup_key(key: &str) -> String {
    format!("{}.corrupt", key)
}

const SCHEMA_BLOBS: &str = "CREATE TABLE IF NOT EXISTS blobs (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SELECT_BLOB: &str = "SELECT value FROM blobs WHERE key = ?1";
const UPSERT_BLOB: &str = "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens the store in the platform data directory, falling back to memory.
    pub fn new() -> Result<Store> {
        match Db::new().and_then(Self::from_db) {
            Ok(store) => Ok(store),
            Err(e) => Self::fallback(e),
        }
    }

    /// Opens the store at an explicit database path, falling back to memory.
    pub fn open(path: &Path) -> Result<Store> {
        match Db::open(path).and_then(Self::from_db) {
            Ok(store) => Ok(store),
            Err(e) => Self::fallback(e),
        }
    }

    pub fn in_memory() -> Result<Store> {
        Self::from_db(Db::in_memory()?)
    }

    /// Wraps an already open connection, creating the schema if needed.
    pub fn from_connection(conn: Connection) -> Result<Store> {
        Self::from_db(Db { conn })
    }

    fn from_db(db: Db) -> Result<Store> {
        db.conn.execute(SCHEMA_BLOBS, [])?;
        Ok(Store { conn: db.conn })
    }

    fn fallback(error: anyhow::Error) -> Result<Store> {
        tracing::warn!(error = %error, "data store unavailable, using in-memory database");
        msg_warning!(Message::StoreOpenFailed(error.to_string()));
        msg_warning!(Message::StoreFallbackInMemory);
        Self::in_memory()
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.conn.query_row(SELECT_BLOB, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_BLOB, params![key, value])?;
        Ok(())
    }

    /// Loads the collection stored under `key`; empty when missing or unreadable.
    ///
    /// An undecodable blob is copied to [`backup_key`] first, so the save that
    /// follows a failed load cannot destroy the only copy of it.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read collection, starting empty");
                msg_warning!(Message::StoreLoadFailed(key.to_string(), e.to_string()));
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to decode collection, starting empty");
                msg_warning!(Message::StoreLoadFailed(key.to_string(), e.to_string()));
                self.back_up(key, &raw);
                Vec::new()
            }
        }
    }

    fn back_up(&self, key: &str, raw: &str) {
        let backup = backup_key(key);
        match self.set(&backup, raw) {
            Ok(()) => msg_warning!(Message::StoreBlobBackedUp(backup)),
            Err(e) => tracing::warn!(key = %backup, error = %e, "failed to back up unreadable collection"),
        }
    }

    /// Replaces the collection stored under `key`. Returns whether it was written.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> bool {
        let result = serde_json::to_string(items).map_err(anyhow::Error::from).and_then(|raw| self.set(key, &raw));
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to save collection");
                false
            }
        }
    }

    pub fn load_desk(&self) -> Desk {
        Desk::from_parts(self.load(ZONES_KEY), self.load(HISTORY_KEY))
    }

    /// Saves both collections. Returns whether both were written.
    pub fn save_desk(&self, desk: &Desk) -> bool {
        let zones_saved = self.save(ZONES_KEY, desk.zones());
        let history_saved = self.save(HISTORY_KEY, desk.history().entries());
        zones_saved && history_saved
    }
}
