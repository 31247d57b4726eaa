use chrono::NaiveDate;
use journey_core::{AnalysisConfig, JourneyAnalyzer};
use journey_infrastructure::{ReportExporter, open_source};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_semicolon_csv_to_exports() {
    let table = open_source(&fixture("contacts.csv"), b';')
        .read_table()
        .unwrap();
    let report = JourneyAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze_table(&table)
        .unwrap();

    assert_eq!(report.event_count, 5);
    assert_eq!(report.journeys.len(), 2);
    assert_eq!(report.journeys[0].customer_id, "K-100");
    assert_eq!(report.journeys[0].city, "Berlin");
    assert_eq!(report.stats.overview.ended_with_order, 1);

    let temp_dir = TempDir::new().unwrap();
    let exporter = ReportExporter::new(
        temp_dir.path(),
        NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
    );
    exporter.export_all(&report).unwrap();

    let journeys = fs::read_to_string(temp_dir.path().join("journeys_all_20240408.csv")).unwrap();
    let lines: Vec<&str> = journeys.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "Olga,K-100,2024-04-01 09:00,Termin vereinbart,Telefonat → Auftrag erteilt,2,2024-04-05 14:00,Olga,Auftrag erteilt,10115,Berlin"
    );
    assert_eq!(
        lines[2],
        "Paul,K-200,2024-04-03 11:00,Termin vereinbart,no further contact,0,2024-04-03 11:00,Paul,no further contact,20095,Hamburg"
    );

    let flow = fs::read_to_string(temp_dir.path().join("flow_20240408.csv")).unwrap();
    assert!(flow.starts_with("source,target,weight,source_category,target_category\n"));
    assert_eq!(flow.lines().count(), 4);
}

#[test]
fn test_json_source_matches_csv_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("contacts.json");
    fs::write(
        &path,
        r#"[
  {"Mitarbeiter": "Olga", "Kontaktart": "Termin vereinbart", "Kontakt": 100, "Datum/Uhrzeit": "2024-04-01 09:00"},
  {"Mitarbeiter": "Olga", "Kontaktart": "Auftrag erteilt", "Kontakt": 100, "Datum/Uhrzeit": "2024-04-02 09:00"}
]"#,
    )
    .unwrap();

    let table = open_source(&path, b',').read_table().unwrap();
    let report = JourneyAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze_table(&table)
        .unwrap();

    assert_eq!(report.journeys[0].customer_id, "100");
    assert_eq!(report.stats.employee("Olga").unwrap().conversion_rate, 100.0);
}
