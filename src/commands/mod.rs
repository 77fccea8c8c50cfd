//! Command-line interface of the zonal application.
//!
//! Each subcommand loads the desk from the store, performs one operation
//! against it with the current local time, saves it back when something
//! changed, and reports the outcome through the message macros.

pub mod add;
pub mod close;
pub mod delete;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod kpi;
pub mod panel;
pub mod toggle;
pub mod watch;

use crate::db::store::Store;
use crate::libs::desk::Desk;
use crate::libs::messages::Message;
use crate::libs::zone::ZoneError;
use crate::{msg_error, msg_warning};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Register a new dispatch zone")]
    Add(add::AddArgs),
    #[command(about = "Change the name or target time of a zone", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a zone from the panel", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Activate or deactivate a zone", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Close a zone and save it to the history", arg_required_else_help = true)]
    Close(close::CloseArgs),
    #[command(about = "Show the dispatch panel")]
    Panel(panel::PanelArgs),
    #[command(about = "Show the dispatch panel and refresh it every tick")]
    Watch(panel::PanelArgs),
    #[command(about = "Show the dispatch history")]
    History,
    #[command(about = "Show the on-time dispatch KPI")]
    Kpi,
    #[command(about = "Export the dispatch history")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Close(args) => close::cmd(args),
            Commands::Panel(args) => panel::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::History => history::cmd(),
            Commands::Kpi => kpi::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// User-facing message for a rejected zone operation.
pub fn zone_error_message(error: &ZoneError) -> Message {
    match error {
        ZoneError::NotFound(id) => Message::ZoneNotFound(id.clone()),
        ZoneError::AmbiguousId(prefix, matches) => Message::ZoneIdAmbiguous(prefix.clone(), *matches),
        ZoneError::EmptyName => Message::ZoneNameEmpty,
        ZoneError::InvalidTargetTime(input) => Message::InvalidTargetTime(input.clone()),
        ZoneError::Completed(name) => Message::ZoneEditCompleted(name.clone()),
    }
}

/// Full id of the zone addressed by `id` (exact or unique prefix), or `None`
/// after reporting why it could not be resolved.
pub(crate) fn resolve_or_report(desk: &Desk, id: &str) -> Option<String> {
    match desk.resolve_id(id) {
        Ok(full_id) => Some(full_id),
        Err(e) => {
            msg_error!(zone_error_message(&e));
            None
        }
    }
}

/// Writes the desk back, warning the user when the store rejected it.
pub(crate) fn persist(store: &Store, desk: &Desk) {
    if !store.save_desk(desk) {
        msg_warning!(Message::StoreSaveFailed);
    }
}
