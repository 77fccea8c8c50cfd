#[cfg(test)]
mod tests {
    use zonal::libs::zone::{DispatchZone, TargetTime, ZoneError, ZoneRegistry, ZoneUpdate};

    fn target(text: &str) -> TargetTime {
        text.parse().unwrap()
    }

    #[test]
    fn test_target_time_parsing() {
        assert_eq!(target("14:00").to_string(), "14:00");
        assert_eq!(target("7:05").to_string(), "07:05");
        assert_eq!(target(" 23:59 ").to_string(), "23:59");

        for invalid in ["", "24:00", "12:60", "noon", "12"] {
            assert_eq!(invalid.parse::<TargetTime>(), Err(ZoneError::InvalidTargetTime(invalid.to_string())));
        }
    }

    #[test]
    fn test_target_time_orders_chronologically() {
        assert!(target("08:30") < target("14:00"));
        assert!(target("09:00").to_string() < target("10:00").to_string());
    }

    #[test]
    fn test_add_creates_active_zone_with_unique_id() {
        let mut registry = ZoneRegistry::default();
        let north = registry.add("North", target("14:00")).unwrap();
        let south = registry.add("South", target("15:30")).unwrap();

        assert!(north.is_active);
        assert_eq!(north.name, "North");
        assert_eq!(north.target_time, target("14:00"));
        assert_ne!(north.id, south.id);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let mut registry = ZoneRegistry::default();
        assert_eq!(registry.add("", target("14:00")), Err(ZoneError::EmptyName));
        assert_eq!(registry.add("   ", target("14:00")), Err(ZoneError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_edit_applies_only_given_fields() {
        let mut registry = ZoneRegistry::default();
        let zone = registry.add("North", target("14:00")).unwrap();

        let edited = registry
            .edit(&zone.id, ZoneUpdate { name: Some("North 2".to_string()), target_time: None })
            .unwrap();
        assert_eq!(edited.name, "North 2");
        assert_eq!(edited.target_time, target("14:00"));
        assert_eq!(edited.id, zone.id);
        assert!(edited.is_active);

        let edited = registry.edit(&zone.id, ZoneUpdate { name: None, target_time: Some(target("16:45")) }).unwrap();
        assert_eq!(edited.name, "North 2");
        assert_eq!(edited.target_time, target("16:45"));
    }

    #[test]
    fn test_edit_validates_before_writing() {
        let mut registry = ZoneRegistry::default();
        let zone = registry.add("North", target("14:00")).unwrap();

        let result = registry.edit(&zone.id, ZoneUpdate { name: Some(" ".to_string()), target_time: Some(target("09:00")) });
        assert_eq!(result, Err(ZoneError::EmptyName));
        assert_eq!(registry.get(&zone.id).unwrap(), &zone);
    }

    #[test]
    fn test_unknown_ids_are_reported() {
        let mut registry = ZoneRegistry::default();
        assert_eq!(registry.delete("missing"), Err(ZoneError::NotFound("missing".to_string())));
        assert_eq!(registry.set_active("missing", false), Err(ZoneError::NotFound("missing".to_string())));
        assert!(registry.edit("missing", ZoneUpdate::default()).is_err());
    }

    #[test]
    fn test_resolve_by_unique_prefix() {
        let zones = vec![
            DispatchZone { id: "abc-1".to_string(), name: "A".to_string(), target_time: target("10:00"), is_active: true },
            DispatchZone { id: "abd-2".to_string(), name: "B".to_string(), target_time: target("11:00"), is_active: true },
        ];
        let registry = ZoneRegistry::new(zones);

        assert_eq!(registry.resolve("abc-1").unwrap().name, "A");
        assert_eq!(registry.resolve("abd").unwrap().name, "B");
        assert_eq!(registry.resolve("ab"), Err(ZoneError::AmbiguousId("ab".to_string(), 2)));
        assert_eq!(registry.resolve("zz"), Err(ZoneError::NotFound("zz".to_string())));
        assert_eq!(registry.resolve(""), Err(ZoneError::NotFound(String::new())));
    }

    #[test]
    fn test_zone_serializes_in_stored_layout() {
        let zone = DispatchZone { id: "z1".to_string(), name: "North".to_string(), target_time: target("14:00"), is_active: false };
        let json = serde_json::to_value(&zone).unwrap();

        assert_eq!(json, serde_json::json!({"id": "z1", "name": "North", "targetTime": "14:00", "isActive": false}));

        let back: DispatchZone = serde_json::from_value(json).unwrap();
        assert_eq!(back, zone);
    }

    #[test]
    fn test_zone_with_invalid_target_time_fails_to_decode() {
        let json = serde_json::json!({"id": "z1", "name": "North", "targetTime": "25:00", "isActive": true});
        assert!(serde_json::from_value::<DispatchZone>(json).is_err());
    }
}
