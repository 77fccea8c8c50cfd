//! Zone closure command.
//!
//! Freezes the zone's countdown at the moment of the call into a new history
//! entry and switches the zone off. Closing a zone that is already in the
//! history records nothing new.

use super::{persist, resolve_or_report};
use crate::{
    db::store::Store,
    libs::{
        clock::{Clock, SystemClock},
        desk::CloseOutcome,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CloseArgs {
    /// Zone id or a unique prefix of it
    id: String,
}

pub fn cmd(args: CloseArgs) -> Result<()> {
    let store = Store::new()?;
    let mut desk = store.load_desk();

    let Some(id) = resolve_or_report(&desk, &args.id) else {
        return Ok(());
    };
    let name = desk.zone(&id)?.name.clone();

    let outcome = desk.close(&id, SystemClock.now())?;
    // A repeated closure still re-applies the inactive flag
    persist(&store, &desk);

    match outcome {
        CloseOutcome::Closed(entry) => msg_success!(Message::ZoneClosed {
            name: entry.zonal_name,
            registered_time: entry.registered_time,
        }),
        CloseOutcome::AlreadyClosed => msg_info!(Message::ZoneAlreadyClosed(name)),
    }

    Ok(())
}
