use super::{persist, resolve_or_report, zone_error_message};
use crate::{db::store::Store, libs::messages::Message, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Zone id or a unique prefix of it
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let store = Store::new()?;
    let mut desk = store.load_desk();

    let Some(id) = resolve_or_report(&desk, &args.id) else {
        return Ok(());
    };
    let name = desk.zone(&id)?.name.clone();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteZone(name).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    match desk.delete_zone(&id) {
        Ok(zone) => {
            persist(&store, &desk);
            msg_success!(Message::ZoneDeleted(zone.name));
        }
        Err(e) => msg_error!(zone_error_message(&e)),
    }

    Ok(())
}
