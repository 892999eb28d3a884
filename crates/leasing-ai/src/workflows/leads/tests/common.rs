use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::workflows::leads::domain::{Lead, LeadId, LeadStatus, UnitType};
use crate::workflows::leads::repository::{LeadDocument, LeadStore, LeadStoreError};
use crate::workflows::leads::{LeadIntelligenceService, ScoringWeights};

pub(super) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

/// Wednesday mid-morning.
pub(super) fn now() -> NaiveDateTime {
    at(2025, 10, 15, 10, 0)
}

pub(super) fn move_in_after(days: i64) -> String {
    (now().date() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub(super) fn lead(status: &str, unit_type: &str, move_in_date: &str) -> Lead {
    Lead {
        id: LeadId("lead-001".to_string()),
        name: "Sarah Mitchell".to_string(),
        email: "sarah.mitchell@email.com".to_string(),
        phone: "(206) 555-1234".to_string(),
        status: LeadStatus::from_label(status),
        move_in_date: move_in_date.to_string(),
        unit_type: UnitType::from_label(unit_type),
        occupants: None,
        pets: None,
        notes: None,
        employer: None,
        move_reason: None,
        created_at: None,
    }
}

pub(super) fn complete_lead(status: &str, unit_type: &str, move_in_date: &str) -> Lead {
    Lead {
        notes: Some("Very interested in top floor unit with good lighting.".to_string()),
        employer: Some("Microsoft".to_string()),
        move_reason: Some("Upsizing".to_string()),
        occupants: Some(2),
        pets: Some("1 small dog".to_string()),
        ..lead(status, unit_type, move_in_date)
    }
}

pub(super) fn document(value: Value) -> LeadDocument {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub(super) fn history() -> Vec<LeadDocument> {
    vec![
        document(json!({ "status": "Leased", "unitType": "1 Bedroom" })),
        document(json!({ "status": "Approved", "unitType": "2 Bedroom" })),
        document(json!({ "status": "Tour Completed", "unitType": "2 Bedroom" })),
        document(json!({ "name": "Walk-in" })),
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    documents: Arc<Mutex<Vec<LeadDocument>>>,
}

impl MemoryStore {
    pub(super) fn with_documents(documents: Vec<LeadDocument>) -> Self {
        Self {
            documents: Arc::new(Mutex::new(documents)),
        }
    }
}

impl LeadStore for MemoryStore {
    fn documents(&self) -> Result<Vec<LeadDocument>, LeadStoreError> {
        Ok(self.documents.lock().expect("store mutex poisoned").clone())
    }
}

pub(super) struct UnavailableStore;

impl LeadStore for UnavailableStore {
    fn documents(&self) -> Result<Vec<LeadDocument>, LeadStoreError> {
        Err(LeadStoreError::Unavailable("firestore offline".to_string()))
    }
}

pub(super) fn build_service() -> LeadIntelligenceService<MemoryStore> {
    LeadIntelligenceService::new(
        Arc::new(MemoryStore::with_documents(history())),
        ScoringWeights::default(),
    )
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
