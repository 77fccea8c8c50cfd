use super::{persist, resolve_or_report, zone_error_message};
use crate::{
    db::store::Store,
    libs::{
        messages::Message,
        zone::{TargetTime, ZoneUpdate},
    },
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Zone id or a unique prefix of it
    id: String,

    /// New zone name
    #[arg(short, long)]
    name: Option<String>,

    /// New target time as HH:MM
    #[arg(short, long)]
    time: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let store = Store::new()?;
    let mut desk = store.load_desk();

    let Some(id) = resolve_or_report(&desk, &args.id) else {
        return Ok(());
    };
    let zone = desk.zone(&id)?.clone();

    // Without flags, edit interactively starting from the current values
    let (name, time) = if args.name.is_none() && args.time.is_none() {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptZoneName.to_string())
            .default(zone.name.clone())
            .interact_text()?;
        let time: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTargetTime.to_string())
            .default(zone.target_time.to_string())
            .interact_text()?;
        (Some(name), Some(time))
    } else {
        (args.name, args.time)
    };

    let target_time = match time.as_deref().map(str::parse::<TargetTime>).transpose() {
        Ok(target_time) => target_time,
        Err(e) => {
            msg_error!(zone_error_message(&e));
            return Ok(());
        }
    };

    let update = ZoneUpdate {
        name: name.filter(|name| *name != zone.name),
        target_time: target_time.filter(|target_time| *target_time != zone.target_time),
    };
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match desk.edit_zone(&id, update) {
        Ok(zone) => {
            persist(&store, &desk);
            msg_success!(Message::ZoneUpdated(zone.name));
        }
        Err(e) => msg_error!(zone_error_message(&e)),
    }

    Ok(())
}
