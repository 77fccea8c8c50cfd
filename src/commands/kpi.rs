use crate::{
    db::store::Store,
    libs::{kpi::KpiReport, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let desk = Store::new()?.load_desk();

    msg_print!(Message::KpiHeader, true);
    View::kpi(&KpiReport::from_history(desk.history()));
    Ok(())
}
