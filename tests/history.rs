#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use zonal::libs::export::write_csv;
    use zonal::libs::history::{HistoryEntry, HistoryLog, REGISTERED_TIME_PLACEHOLDER};
    use zonal::libs::zone::DispatchZone;

    fn entry(registered_time: &str) -> HistoryEntry {
        HistoryEntry {
            id: "h1".to_string(),
            original_zone_id: "z1".to_string(),
            zonal_name: "North".to_string(),
            date: "14-03-2025".to_string(),
            registered_time: registered_time.to_string(),
            target_time: "14:00".to_string(),
            saved_time: "13:30:00".to_string(),
        }
    }

    #[test]
    fn test_empty_registered_time_shows_placeholder() {
        assert_eq!(entry("").registered_time_display(), REGISTERED_TIME_PLACEHOLDER);
        assert_eq!(REGISTERED_TIME_PLACEHOLDER, "--:--:--");
        assert_eq!(entry("00:12:00").registered_time_display(), "00:12:00");
        assert_eq!(entry("00:00:00").registered_time_display(), "00:00:00");
    }

    #[test]
    fn test_csv_keeps_empty_registered_time_raw() {
        let mut buffer = Vec::new();
        write_csv(&HistoryLog::new(vec![entry("")]), &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), "h1,North,14-03-2025,,14:00,13:30:00");
    }

    #[test]
    fn test_record_copies_zone_and_freezes_countdown() {
        let zone = DispatchZone {
            id: "z1".to_string(),
            name: "North".to_string(),
            target_time: "14:00".parse().unwrap(),
            is_active: true,
        };
        let now = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(13, 45, 10).unwrap();

        let recorded = HistoryEntry::record(&zone, now);
        assert_ne!(recorded.id, zone.id);
        assert_eq!(recorded.original_zone_id, "z1");
        assert_eq!(recorded.registered_time, "00:14:50");
        assert_eq!(recorded.registered_time_display(), "00:14:50");
        assert_eq!(recorded.saved_time, "13:45:10");
    }
}
