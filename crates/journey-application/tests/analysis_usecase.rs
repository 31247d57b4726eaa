use chrono::NaiveDate;
use journey_application::{AnalysisUseCase, ExportScope};
use journey_core::JourneyError;
use journey_infrastructure::ConfigService;
use std::fs;
use tempfile::TempDir;

const CONTACTS: &str = "\
Mitarbeiter,Kontaktart,Kontakt,Datum/Uhrzeit,Berichtsinhaber
Olga,Termin vereinbart,K-1,2024-04-01 09:00,Olga
Olga,Auftrag erteilt,K-1,2024-04-03 09:00,Olga
Paul,Termin vereinbart,K-2,2024-04-02 09:00,Paul
";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
}

#[test]
fn test_analyze_and_export_per_employee() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    fs::write(&input, CONTACTS).unwrap();
    let out_dir = temp_dir.path().join("out");

    let usecase =
        AnalysisUseCase::from_config_service(&ConfigService::with_path(temp_dir.path().join("none.toml")))
            .unwrap();
    let report = usecase.analyze_path(&input, b',').unwrap();
    let manifest = usecase
        .export(&report, &out_dir, date(), ExportScope::PerEmployee)
        .unwrap();

    assert_eq!(manifest.len(), 3);
    assert!(out_dir.join("journeys_all_20240410.csv").exists());
    assert!(out_dir.join("journeys_Olga_20240410.csv").exists());
    assert!(out_dir.join("journeys_Paul_20240410.csv").exists());
}

#[test]
fn test_full_export_of_empty_result_still_writes_headers() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    fs::write(
        &input,
        "Mitarbeiter,Kontaktart,Kontakt,Datum/Uhrzeit\nOlga,Telefonat,K-1,2024-04-01 09:00\n",
    )
    .unwrap();

    let usecase = AnalysisUseCase::new(Default::default()).unwrap();
    let report = usecase.analyze_path(&input, b',').unwrap();
    assert!(report.is_empty());

    let manifest = usecase
        .export(&report, temp_dir.path(), date(), ExportScope::Full)
        .unwrap();
    assert_eq!(manifest.len(), 4);
    let employees = fs::read_to_string(temp_dir.path().join("employees_20240410.csv")).unwrap();
    assert_eq!(
        employees,
        "employee,total_appointments,with_follow_up,orders,conversion_rate,status_histogram\n"
    );
}

#[test]
fn test_schema_error_surfaces_through_context() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("contacts.csv");
    fs::write(&input, "Mitarbeiter,Kontakt\nOlga,K-1\n").unwrap();

    let usecase = AnalysisUseCase::new(Default::default()).unwrap();
    let err = usecase.analyze_path(&input, b',').unwrap_err();

    let root = err.downcast_ref::<JourneyError>().unwrap();
    assert!(root.is_schema());
    assert!(format!("{err:#}").contains("Kontaktart"));
}
