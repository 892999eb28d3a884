use std::io::Write;

use serde_json::json;

use super::common::*;
use crate::workflows::leads::repository::{CsvLeadStore, LeadStore, LeadStoreError};
use crate::workflows::leads::{conversion_factors, ConversionReport};

#[test]
fn tallies_statuses_units_and_conversion_rate() {
    let report = conversion_factors(&MemoryStore::with_documents(history())).expect("report");

    assert_eq!(report.total_leads, 4);
    assert_eq!(report.by_status.get("Leased"), Some(&1));
    assert_eq!(report.by_status.get("Approved"), Some(&1));
    assert_eq!(report.by_status.get("Tour Completed"), Some(&1));
    assert_eq!(report.by_status.get("Unknown"), Some(&1));
    assert_eq!(report.by_unit_type.get("2 Bedroom"), Some(&2));
    assert_eq!(report.by_unit_type.get("Unknown"), Some(&1));
    assert!(report.by_days_until_move.is_empty());
    assert_close(report.conversion_rate, 50.0);
}

#[test]
fn empty_store_reports_zero_rate() {
    let report = conversion_factors(&MemoryStore::default()).expect("report");

    assert_eq!(report, ConversionReport::default());
    assert_eq!(report.conversion_rate, 0.0);
}

#[test]
fn non_text_fields_count_as_unknown() {
    let documents = vec![document(json!({ "status": 7, "unitType": null }))];

    let report = ConversionReport::from_documents(&documents);

    assert_eq!(report.by_status.get("Unknown"), Some(&1));
    assert_eq!(report.by_unit_type.get("Unknown"), Some(&1));
    assert_eq!(report.conversion_rate, 0.0);
}

#[test]
fn store_failures_propagate() {
    let err = conversion_factors(&UnavailableStore).expect_err("store offline");

    assert!(matches!(err, LeadStoreError::Unavailable(_)));
}

#[test]
fn csv_store_reads_export_rows_as_documents() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "name,status,unitType,moveInDate").expect("write header");
    writeln!(file, "Marcus Chen,Leased,1 Bedroom,2025-01-15").expect("write row");
    writeln!(file, "Jennifer Davis,New Inquiry,Studio,2025-11-11").expect("write row");
    writeln!(file, "Walk-in,, ,").expect("write row");
    file.flush().expect("flush");

    let store = CsvLeadStore::new(file.path());
    let documents = store.documents().expect("documents load");

    assert_eq!(documents.len(), 3);
    assert_eq!(documents[0].get("status"), Some(&json!("Leased")));
    assert!(documents[2].get("status").is_none());
    assert!(documents[2].get("unitType").is_none());

    let report = conversion_factors(&store).expect("report");
    assert_eq!(report.total_leads, 3);
    assert_eq!(report.by_status.get("Unknown"), Some(&1));
    assert_eq!(report.by_unit_type.get("Studio"), Some(&1));
    assert_close(report.conversion_rate, 100.0 / 3.0);
}

#[test]
fn csv_store_reports_missing_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = CsvLeadStore::new(dir.path().join("leads.csv"));

    let err = store.documents().expect_err("missing file");

    match err {
        LeadStoreError::Csv { path, .. } => assert_eq!(path, store.path()),
        other => panic!("expected csv error, got {other:?}"),
    }
}
