//! Live dispatch panel.
//!
//! Redraws the panel on every tick until Ctrl-C. The desk is reloaded from the
//! store on each tick so zones added or closed from another terminal show up
//! without restarting the view.

use super::panel::{render, PanelArgs};
use crate::{
    db::store::Store,
    libs::{clock::SystemClock, config::Config, messages::Message, ticker::Ticker},
    msg_error, msg_info,
};
use anyhow::Result;
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub async fn cmd(args: PanelArgs) -> Result<()> {
    let dashboard = Config::read()?.dashboard_or_default();
    let sort = args.sort_config(dashboard.sort());
    let interval = dashboard.tick_interval();

    let store = Store::new()?;
    msg_info!(Message::WatchStarted(interval.as_millis() as u64));

    let mut ticker = Ticker::new(interval);
    ticker.start(SystemClock, move |now| {
        let desk = store.load_desk();
        print!("{}", CLEAR_SCREEN);
        let _ = io::stdout().flush();
        render(&desk, sort, now);
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        msg_error!(Message::WatchCtrlCListenFailed(e.to_string()));
    }

    ticker.stop();
    msg_info!(Message::WatchStopped, true);
    Ok(())
}
