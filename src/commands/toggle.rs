use super::{persist, resolve_or_report};
use crate::{
    db::store::Store,
    libs::{desk::ToggleOutcome, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Zone id or a unique prefix of it
    id: String,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let store = Store::new()?;
    let mut desk = store.load_desk();

    let Some(id) = resolve_or_report(&desk, &args.id) else {
        return Ok(());
    };
    let name = desk.zone(&id)?.name.clone();

    match desk.toggle_active(&id)? {
        ToggleOutcome::Activated => {
            persist(&store, &desk);
            msg_success!(Message::ZoneActivated(name));
        }
        ToggleOutcome::Deactivated => {
            persist(&store, &desk);
            msg_success!(Message::ZoneDeactivated(name));
        }
        ToggleOutcome::Locked => msg_info!(Message::ZoneLockedCompleted(name)),
    }

    Ok(())
}
