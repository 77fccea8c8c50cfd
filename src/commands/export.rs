//! History export command.
//!
//! Writes the dispatch history to a CSV file for spreadsheets, or to JSON
//! together with the KPI summary. The default file name comes from the export
//! section of the configuration.

use crate::{
    db::store::Store,
    libs::{
        config::Config,
        export::{ExportError, ExportFormat, HistoryExporter},
        messages::Message,
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported history
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path; defaults to the configured file name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let export_config = Config::read()?.export_or_default();
    let desk = Store::new()?.load_desk();

    let exporter = HistoryExporter::new(args.format, args.output, &export_config.file_name);
    match exporter.export(desk.history()) {
        Ok(path) => msg_success!(Message::ExportCompleted(path.display().to_string())),
        Err(ExportError::EmptyHistory) => msg_info!(Message::ExportEmptyHistory),
        Err(e) => msg_error!(Message::ExportFailed(e.to_string())),
    }

    Ok(())
}
