//! # Zonal - Dispatch Zone Tracker
//!
//! A command-line utility for tracking dispatch zones against their daily
//! target times, closing them into a history log, and measuring how many were
//! dispatched on time.
//!
//! ## Features
//!
//! - **Zone Management**: Create, edit, activate and delete dispatch zones
//! - **Live Panel**: Per-second countdown to each zone's target time
//! - **Closure**: Freeze the countdown of a zone into the history log
//! - **KPI**: Share of closures registered before their target time
//! - **Data Export**: Export the history to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonal::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
