#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use zonal::libs::history::{HistoryEntry, HistoryLog};
    use zonal::libs::status::{derive_status, displayed_remaining, sortable_remaining, DispatchStatus};
    use zonal::libs::zone::DispatchZone;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(hour, minute, second).unwrap()
    }

    fn zone(id: &str, target: &str, is_active: bool) -> DispatchZone {
        DispatchZone {
            id: id.to_string(),
            name: format!("Zone {}", id),
            target_time: target.parse().unwrap(),
            is_active,
        }
    }

    fn entry_for(zone: &DispatchZone, registered_time: &str) -> HistoryEntry {
        HistoryEntry {
            id: format!("h-{}", zone.id),
            original_zone_id: zone.id.clone(),
            zonal_name: zone.name.clone(),
            date: "14-03-2025".to_string(),
            registered_time: registered_time.to_string(),
            target_time: zone.target_time.to_string(),
            saved_time: "13:00:00".to_string(),
        }
    }

    #[test]
    fn test_status_rank_and_labels() {
        assert_eq!(DispatchStatus::InProgress.rank(), 1);
        assert_eq!(DispatchStatus::Completed.rank(), 2);
        assert_eq!(DispatchStatus::Inactive.rank(), 3);

        assert_eq!(DispatchStatus::InProgress.to_string(), "En progreso");
        assert_eq!(DispatchStatus::Completed.to_string(), "Completado");
        assert_eq!(DispatchStatus::Inactive.to_string(), "Inactivo");
    }

    #[test]
    fn test_history_takes_precedence_over_active_flag() {
        let active = zone("a", "14:00", true);
        let inactive = zone("b", "14:00", false);
        let history = HistoryLog::new(vec![entry_for(&active, "00:10:00"), entry_for(&inactive, "00:05:00")]);

        assert_eq!(derive_status(&active, &history), DispatchStatus::Completed);
        assert_eq!(derive_status(&inactive, &history), DispatchStatus::Completed);
    }

    #[test]
    fn test_status_without_history() {
        let history = HistoryLog::default();
        assert_eq!(derive_status(&zone("a", "14:00", true), &history), DispatchStatus::InProgress);
        assert_eq!(derive_status(&zone("b", "14:00", false), &history), DispatchStatus::Inactive);
    }

    #[test]
    fn test_displayed_remaining_per_status() {
        let running = zone("a", "14:00", true);
        let stopped = zone("b", "14:00", false);
        let closed = zone("c", "14:00", false);
        let history = HistoryLog::new(vec![entry_for(&closed, "00:42:17")]);
        let now = at(13, 0, 0);

        assert_eq!(displayed_remaining(&running, &history, now), "01:00:00");
        assert_eq!(displayed_remaining(&stopped, &history, now), "00:00:00");
        // Frozen at closure, does not move with the clock
        assert_eq!(displayed_remaining(&closed, &history, now), "00:42:17");
        assert_eq!(displayed_remaining(&closed, &history, at(13, 30, 0)), "00:42:17");
    }

    #[test]
    fn test_sortable_remaining_matches_display() {
        let running = zone("a", "14:00", true);
        let closed = zone("c", "14:00", true);
        let garbled = zone("g", "14:00", true);
        let history = HistoryLog::new(vec![entry_for(&closed, "00:42:17"), entry_for(&garbled, "??")]);
        let now = at(13, 0, 0);

        assert_eq!(sortable_remaining(&running, &history, now), 3_600);
        assert_eq!(sortable_remaining(&closed, &history, now), 42 * 60 + 17);
        assert_eq!(sortable_remaining(&garbled, &history, now), 0);
    }
}
