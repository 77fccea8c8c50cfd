//! Core library modules for the zonal application.
//!
//! Everything here is independent of the command line: the commands in
//! [`crate::commands`] load a [`desk::Desk`] from the store, call into these
//! modules with an explicit `now`, and render the result.
//!
//! ## Features
//!
//! - **Domain**: zones, the history log, and the desk that owns both
//! - **Engines**: countdown, status derivation, sorting, KPI
//! - **Live Panel**: clock source, ticker, panel rows
//! - **Infrastructure**: configuration, data storage, messaging
//! - **User Interface**: table rendering, history export, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonal::libs::desk::Desk;
//! use zonal::libs::zone::TargetTime;
//! use chrono::Local;
//!
//! let mut desk = Desk::default();
//! let zone = desk.add_zone("North", "14:00".parse::<TargetTime>()?)?;
//! desk.close(&zone.id, Local::now().naive_local())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clock;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod data_storage;
pub mod desk;
pub mod export;
pub mod formatter;
pub mod history;
pub mod kpi;
pub mod messages;
pub mod sort;
pub mod status;
pub mod ticker;
pub mod view;
pub mod zone;
