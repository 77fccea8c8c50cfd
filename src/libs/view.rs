use super::dashboard::PanelRow;
use super::history::HistoryEntry;
use super::kpi::KpiReport;
use super::messages::Message;
use crate::{msg_info, msg_print};
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn panel(rows: &[PanelRow]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "ZONAL", "HORA OBJ.", "RESTANTE", "ESTADO", "ACTIVO"]);
        for panel_row in rows {
            let remaining = if panel_row.is_overdue() {
                Cell::new(&panel_row.remaining).style_spec("Fr")
            } else {
                Cell::new(&panel_row.remaining)
            };
            table.add_row(Row::new(vec![
                Cell::new(panel_row.short_id()),
                Cell::new(&panel_row.name),
                Cell::new(&panel_row.target_time),
                remaining,
                Cell::new(panel_row.status.label()),
                Cell::new(if panel_row.is_active { "sí" } else { "no" }),
            ]));
        }
        table.printstd();
    }

    pub fn history(entries: &[HistoryEntry]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "ZONAL", "FECHA", "REGISTRADA", "OBJETIVO", "GUARDADO"]);
        for entry in entries {
            table.add_row(row![
                entry.id.split('-').next().unwrap_or(&entry.id),
                entry.zonal_name,
                entry.date,
                entry.registered_time_display(),
                entry.target_time,
                entry.saved_time
            ]);
        }
        table.printstd();
    }

    pub fn kpi(report: &KpiReport) {
        if !report.has_data() {
            msg_info!(Message::KpiNoData);
            return;
        }

        msg_print!(Message::KpiPercentage(report.on_time_percentage));
        msg_print!(Message::KpiSummary {
            on_time: report.on_time_count,
            late: report.late_count,
            total: report.total_count,
        });
    }
}
