#[cfg(test)]
mod tests {
    use zonal::commands::panel::PanelArgs;
    use zonal::commands::zone_error_message;
    use zonal::libs::sort::{SortConfig, SortDirection, SortKey};
    use zonal::libs::zone::ZoneError;

    fn configured() -> SortConfig {
        SortConfig::new(SortKey::RemainingTime, SortDirection::Descending)
    }

    #[test]
    fn test_panel_without_flags_uses_configured_sort() {
        let args = PanelArgs { sort: None, desc: false };
        assert_eq!(args.sort_config(configured()), configured());
    }

    #[test]
    fn test_panel_sort_flag_starts_ascending() {
        let args = PanelArgs { sort: Some(SortKey::Name), desc: false };
        assert_eq!(args.sort_config(configured()), SortConfig::new(SortKey::Name, SortDirection::Ascending));
    }

    #[test]
    fn test_panel_desc_flag_keeps_configured_key() {
        let args = PanelArgs { sort: None, desc: true };
        let default = SortConfig::default();
        assert_eq!(args.sort_config(default), SortConfig::new(SortKey::Status, SortDirection::Descending));
    }

    #[test]
    fn test_zone_errors_map_to_user_messages() {
        let cases = [
            (ZoneError::NotFound("abc".to_string()), "No zone found with id 'abc'"),
            (ZoneError::AmbiguousId("a".to_string(), 3), "Id prefix 'a' matches 3 zones, use more characters"),
            (ZoneError::EmptyName, "Zone name must not be empty"),
            (ZoneError::InvalidTargetTime("9".to_string()), "Invalid target time '9', expected HH:MM"),
            (ZoneError::Completed("North".to_string()), "Zone 'North' is completed (in history) and cannot be edited"),
        ];

        for (error, text) in cases {
            assert_eq!(zone_error_message(&error).to_string(), text);
        }
    }
}
