//! One-shot dispatch panel.
//!
//! Prints every zone with its live countdown and derived status, sorted by the
//! requested key or by the configured default. [`render`] is shared with the
//! watch command so both show the same thing for the same instant.

use crate::{
    db::store::Store,
    libs::{
        clock::{Clock, SystemClock},
        config::Config,
        dashboard::panel_rows,
        desk::Desk,
        formatter::format_header,
        messages::Message,
        sort::{SortConfig, SortDirection, SortKey},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct PanelArgs {
    /// Column to sort by; defaults to the configured dashboard sort
    #[arg(short, long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort in descending order
    #[arg(short, long)]
    pub desc: bool,
}

impl PanelArgs {
    /// Sort requested on the command line, falling back to `default` for whatever was not given.
    pub fn sort_config(&self, default: SortConfig) -> SortConfig {
        let direction = if self.desc {
            SortDirection::Descending
        } else if self.sort.is_some() {
            SortDirection::Ascending
        } else {
            default.direction
        };
        SortConfig::new(self.sort.unwrap_or(default.key), direction)
    }
}

pub fn cmd(args: PanelArgs) -> Result<()> {
    let config = Config::read()?;
    let sort = args.sort_config(config.dashboard_or_default().sort());

    let desk = Store::new()?.load_desk();
    render(&desk, sort, SystemClock.now());
    Ok(())
}

pub fn render(desk: &Desk, sort: SortConfig, now: NaiveDateTime) {
    msg_print!(Message::PanelHeader(format_header(&now)), true);

    if desk.registry().is_empty() {
        msg_info!(Message::NoZonesYet);
        return;
    }

    View::panel(&panel_rows(desk, sort, now));
}
