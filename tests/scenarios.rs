#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zonal::libs::desk::{CloseOutcome, Desk};
    use zonal::libs::history::{HistoryEntry, HistoryLog};
    use zonal::libs::kpi::KpiReport;
    use zonal::libs::status::DispatchStatus;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn test_north_zone_through_its_day() {
        let mut desk = Desk::default();
        let north = desk.add_zone("North", "14:00".parse().unwrap()).unwrap();

        // An hour before the deadline
        let zone = desk.zone(&north.id).unwrap();
        assert_eq!(desk.status(zone), DispatchStatus::InProgress);
        assert_eq!(desk.displayed_remaining(zone, at(13, 0, 0)), "01:00:00");

        // Past the deadline, never closed
        let zone = desk.zone(&north.id).unwrap();
        assert_eq!(desk.status(zone), DispatchStatus::InProgress);
        assert_eq!(desk.displayed_remaining(zone, at(14, 5, 0)), "00:00:00");

        // Closed late
        let CloseOutcome::Closed(entry) = desk.close(&north.id, at(14, 5, 0)).unwrap() else {
            panic!("expected a new history entry");
        };
        assert_eq!(entry.registered_time, "00:00:00");
        assert_eq!(entry.original_zone_id, north.id);
        assert!(!desk.zone(&north.id).unwrap().is_active);
        assert_eq!(desk.history().len(), 1);

        // Flipping the flag on the record directly does not reopen it
        desk.registry_mut().set_active(&north.id, true).unwrap();
        assert_eq!(desk.status(desk.zone(&north.id).unwrap()), DispatchStatus::Completed);
    }

    #[test]
    fn test_kpi_one_on_time_two_late() {
        let entries = ["00:10:00", "00:00:00", "00:00:00"]
            .iter()
            .enumerate()
            .map(|(i, registered_time)| HistoryEntry {
                id: format!("h{}", i),
                original_zone_id: format!("z{}", i),
                zonal_name: format!("Zone {}", i),
                date: "14-03-2025".to_string(),
                registered_time: registered_time.to_string(),
                target_time: "14:00".to_string(),
                saved_time: "13:50:00".to_string(),
            })
            .collect();

        let report = KpiReport::from_history(&HistoryLog::new(entries));
        assert_eq!(report.on_time_count, 1);
        assert_eq!(report.late_count, 2);
        assert_eq!(report.total_count, 3);
        assert_eq!(report.on_time_percentage, 33.3);
    }
}
