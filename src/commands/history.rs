use crate::{
    db::store::Store,
    libs::{kpi::KpiReport, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

/// Lists the history log, most recent closure first, followed by the KPI.
pub fn cmd() -> Result<()> {
    let desk = Store::new()?.load_desk();
    let history = desk.history();

    if history.is_empty() {
        msg_info!(Message::HistoryEmpty);
        return Ok(());
    }

    msg_print!(Message::HistoryHeader, true);
    View::history(history.entries());

    msg_print!(Message::KpiHeader, true);
    View::kpi(&KpiReport::from_history(history));
    Ok(())
}
