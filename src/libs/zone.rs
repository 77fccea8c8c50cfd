//! Dispatch zones and the registry that owns them.
//!
//! A zone is a unit of dispatch work with a daily deadline. The registry holds
//! the live collection and hosts the plain CRUD operations; anything that needs
//! the history log (status, closure) goes through [`crate::libs::desk::Desk`].

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error type for zone operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("no zone found with id '{0}'")]
    NotFound(String),
    #[error("id prefix '{0}' matches {1} zones")]
    AmbiguousId(String, usize),
    #[error("zone name must not be empty")]
    EmptyName,
    #[error("invalid target time '{0}', expected HH:MM")]
    InvalidTargetTime(String),
    #[error("zone '{0}' is completed and cannot be modified")]
    Completed(String),
}

/// Time of day a zone must be dispatched by. Hour and minute only.
///
/// Serialized as `"HH:MM"`, which also makes its text form sort chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetTime(NaiveTime);

impl TargetTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TargetTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TargetTime {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| ZoneError::InvalidTargetTime(s.to_string()))?;
        // Seconds are never part of a target
        TargetTime::new(parsed.hour(), parsed.minute()).ok_or_else(|| ZoneError::InvalidTargetTime(s.to_string()))
    }
}

impl TryFrom<String> for TargetTime {
    type Error = ZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetTime> for String {
    fn from(value: TargetTime) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchZone {
    pub id: String,
    pub name: String,
    pub target_time: TargetTime,
    pub is_active: bool,
}

impl DispatchZone {
    /// Creates an active zone with a fresh random id.
    pub fn new(name: &str, target_time: TargetTime) -> Result<Self, ZoneError> {
        Ok(DispatchZone {
            id: Uuid::new_v4().to_string(),
            name: validate_name(name)?,
            target_time,
            is_active: true,
        })
    }
}

/// Partial update applied by [`ZoneRegistry::edit`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub target_time: Option<TargetTime>,
}

impl ZoneUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.target_time.is_none()
    }
}

/// Names must contain something other than whitespace. A blank name would be an
/// invisible row in the panel, so this is stricter than a plain non-empty check.
/// The name is kept as typed.
fn validate_name(name: &str) -> Result<String, ZoneError> {
    if name.trim().is_empty() {
        return Err(ZoneError::EmptyName);
    }
    Ok(name.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRegistry {
    zones: Vec<DispatchZone>,
}

impl ZoneRegistry {
    pub fn new(zones: Vec<DispatchZone>) -> Self {
        ZoneRegistry { zones }
    }

    pub fn zones(&self) -> &[DispatchZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DispatchZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut DispatchZone, ZoneError> {
        self.zones.iter_mut().find(|z| z.id == id).ok_or_else(|| ZoneError::NotFound(id.to_string()))
    }

    /// Finds the zone whose id is `id` exactly, or the single zone whose id starts with it.
    pub fn resolve(&self, id: &str) -> Result<&DispatchZone, ZoneError> {
        if let Some(zone) = self.get(id) {
            return Ok(zone);
        }
        if id.is_empty() {
            return Err(ZoneError::NotFound(id.to_string()));
        }

        let matches: Vec<&DispatchZone> = self.zones.iter().filter(|z| z.id.starts_with(id)).collect();
        match matches.as_slice() {
            [zone] => Ok(zone),
            [] => Err(ZoneError::NotFound(id.to_string())),
            many => Err(ZoneError::AmbiguousId(id.to_string(), many.len())),
        }
    }

    pub fn add(&mut self, name: &str, target_time: TargetTime) -> Result<DispatchZone, ZoneError> {
        let zone = DispatchZone::new(name, target_time)?;
        self.zones.push(zone.clone());
        Ok(zone)
    }

    /// Applies `update` to the zone. Validation happens before anything is written.
    pub fn edit(&mut self, id: &str, update: ZoneUpdate) -> Result<DispatchZone, ZoneError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let zone = self.get_mut(id)?;
        if let Some(name) = name {
            zone.name = name;
        }
        if let Some(target_time) = update.target_time {
            zone.target_time = target_time;
        }
        Ok(zone.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<DispatchZone, ZoneError> {
        let index = self.zones.iter().position(|z| z.id == id).ok_or_else(|| ZoneError::NotFound(id.to_string()))?;
        Ok(self.zones.remove(index))
    }

    pub fn set_active(&mut self, id: &str, is_active: bool) -> Result<(), ZoneError> {
        self.get_mut(id)?.is_active = is_active;
        Ok(())
    }
}
