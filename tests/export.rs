#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use zonal::libs::export::{write_csv, ExportError, ExportFormat, HistoryExporter, CSV_HEADERS, DEFAULT_EXPORT_FILE_NAME};
    use zonal::libs::history::{HistoryEntry, HistoryLog};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn entry(id: &str, name: &str, registered_time: &str) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            original_zone_id: format!("zone-{}", id),
            zonal_name: name.to_string(),
            date: "14-03-2025".to_string(),
            registered_time: registered_time.to_string(),
            target_time: "14:00".to_string(),
            saved_time: "13:30:00".to_string(),
        }
    }

    #[test]
    fn test_csv_layout() {
        let history = HistoryLog::new(vec![entry("h2", "South", "00:00:00"), entry("h1", "North", "00:30:00")]);
        let mut buffer = Vec::new();
        write_csv(&history, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(lines[0], "ID,Zonal de Despacho,Fecha,Hora Registrada (Contador),Hora Objetivo,Hora Guardado");
        assert_eq!(lines[1], "h2,South,14-03-2025,00:00:00,14:00,13:30:00");
        assert_eq!(lines[2], "h1,North,14-03-2025,00:30:00,14:00,13:30:00");
        assert_eq!(lines.len(), 3);
        assert!(csv.ends_with('\n'));
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn test_csv_quotes_names_with_separators() {
        let history = HistoryLog::new(vec![entry("h1", "North, \"Depot\" 2", "00:30:00")]);
        let mut buffer = Vec::new();
        write_csv(&history, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), r#"h1,"North, ""Depot"" 2",14-03-2025,00:30:00,14:00,13:30:00"#);

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "North, \"Depot\" 2");
    }

    #[test]
    fn test_empty_history_is_rejected() {
        let mut buffer = Vec::new();
        assert!(matches!(write_csv(&HistoryLog::default(), &mut buffer), Err(ExportError::EmptyHistory)));
        assert!(buffer.is_empty());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_writes_file(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("history.csv");
        let history = HistoryLog::new(vec![entry("h1", "North", "00:30:00")]);

        let exporter = HistoryExporter::new(ExportFormat::Csv, Some(output.clone()), DEFAULT_EXPORT_FILE_NAME);
        let path = exporter.export(&history).unwrap();

        assert_eq!(path, output);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ID,Zonal de Despacho"));
        assert!(content.contains("North"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_history_creates_no_file(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("history.csv");
        let exporter = HistoryExporter::new(ExportFormat::Csv, Some(output.clone()), DEFAULT_EXPORT_FILE_NAME);

        assert!(matches!(exporter.export(&HistoryLog::default()), Err(ExportError::EmptyHistory)));
        assert!(!output.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export_includes_kpi(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("history.json");
        let history = HistoryLog::new(vec![entry("h2", "South", "00:00:00"), entry("h1", "North", "00:30:00")]);

        HistoryExporter::new(ExportFormat::Json, Some(output.clone()), DEFAULT_EXPORT_FILE_NAME)
            .export(&history)
            .unwrap();

        let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(document["entries"].as_array().unwrap().len(), 2);
        assert_eq!(document["entries"][0]["zonalName"], "South");
        assert_eq!(document["kpi"]["on_time_count"], 1);
        assert_eq!(document["kpi"]["late_count"], 1);
        assert_eq!(document["kpi"]["on_time_percentage"], 50.0);
    }

    #[test]
    fn test_default_output_path_follows_format() {
        let csv = HistoryExporter::new(ExportFormat::Csv, None, DEFAULT_EXPORT_FILE_NAME);
        assert_eq!(csv.output_path().to_str().unwrap(), "historial_despachos_cial.csv");

        let json = HistoryExporter::new(ExportFormat::Json, None, DEFAULT_EXPORT_FILE_NAME);
        assert_eq!(json.output_path().to_str().unwrap(), "historial_despachos_cial.json");
    }
}
