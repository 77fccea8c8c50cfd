use super::{persist, zone_error_message};
use crate::{
    db::store::Store,
    libs::{messages::Message, zone::TargetTime},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Zone name; prompted for when omitted
    name: Option<String>,

    /// Target time as HH:MM; prompted for when omitted
    time: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptZoneName.to_string())
            .interact_text()?,
    };

    let time = match args.time {
        Some(time) => time,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTargetTime.to_string())
            .interact_text()?,
    };

    let target_time = match time.parse::<TargetTime>() {
        Ok(target_time) => target_time,
        Err(e) => {
            msg_error!(zone_error_message(&e));
            return Ok(());
        }
    };

    let store = Store::new()?;
    let mut desk = store.load_desk();
    match desk.add_zone(&name, target_time) {
        Ok(zone) => {
            persist(&store, &desk);
            msg_success!(Message::ZoneCreated(zone.name));
        }
        Err(e) => msg_error!(zone_error_message(&e)),
    }

    Ok(())
}
