//! History export for spreadsheets and other tools.
//!
//! ## Features
//!
//! - **CSV**: the dispatch history with the column layout operators already
//!   use in their spreadsheets (Spanish headers, one row per closure)
//! - **JSON**: the same entries plus the KPI summary
//!
//! An empty history is rejected instead of producing a file with only headers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonal::libs::export::{ExportFormat, HistoryExporter};
//! use zonal::libs::history::HistoryLog;
//!
//! let exporter = HistoryExporter::new(ExportFormat::Csv, None, "historial_despachos_cial.csv");
//! exporter.export(&HistoryLog::default())?;
//! # Ok::<(), zonal::libs::export::ExportError>(())
//! ```

use crate::libs::history::{HistoryEntry, HistoryLog};
use crate::libs::kpi::KpiReport;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "historial_despachos_cial.csv";

pub const CSV_HEADERS: [&str; 6] = [
    "ID",
    "Zonal de Despacho",
    "Fecha",
    "Hora Registrada (Contador)",
    "Hora Objetivo",
    "Hora Guardado",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("the history is empty")]
    EmptyHistory,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,

    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    entries: &'a [HistoryEntry],
    kpi: KpiReport,
}

pub struct HistoryExporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl HistoryExporter {
    /// `default_file_name` is used when no output path is given; its extension
    /// is replaced to match the format.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, default_file_name: &str) -> Self {
        let output_path = output_path.unwrap_or_else(|| Path::new(default_file_name).with_extension(format.extension()));
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the log to the output path and returns that path.
    pub fn export(&self, history: &HistoryLog) -> Result<PathBuf, ExportError> {
        if history.is_empty() {
            return Err(ExportError::EmptyHistory);
        }

        let file = File::create(&self.output_path)?;
        match self.format {
            ExportFormat::Csv => write_csv(history, file)?,
            ExportFormat::Json => write_json(history, file)?,
        }

        tracing::debug!(path = %self.output_path.display(), entries = history.len(), "history exported");
        Ok(self.output_path.clone())
    }
}

/// Writes the CSV form of the log: header row, then one row per entry in log order.
pub fn write_csv<W: Write>(history: &HistoryLog, writer: W) -> Result<(), ExportError> {
    if history.is_empty() {
        return Err(ExportError::EmptyHistory);
    }

    let mut wtr = csv::WriterBuilder::new().terminator(csv::Terminator::Any(b'\n')).from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;

    for entry in history {
        wtr.write_record([
            entry.id.as_str(),
            entry.zonal_name.as_str(),
            entry.date.as_str(),
            entry.registered_time.as_str(),
            entry.target_time.as_str(),
            entry.saved_time.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(history: &HistoryLog, writer: W) -> Result<(), ExportError> {
    let document = ExportDocument {
        entries: history.entries(),
        kpi: KpiReport::from_history(history),
    };
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
