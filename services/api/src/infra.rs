use chrono::NaiveDateTime;
use leasing_ai::workflows::leads::{
    parse_timestamp, Lead, LeadDocument, LeadId, LeadStatus, LeadStore, LeadStoreError, UnitType,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local document store used when no CSV export is configured.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadStore {
    documents: Arc<Mutex<Vec<LeadDocument>>>,
}

impl InMemoryLeadStore {
    pub(crate) fn seeded(leads: &[Lead]) -> Self {
        let store = Self::default();
        for lead in leads {
            store.insert(lead);
        }
        store
    }

    pub(crate) fn insert(&self, lead: &Lead) {
        let document = match serde_json::to_value(lead) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return,
        };
        if let Ok(mut guard) = self.documents.lock() {
            guard.push(document);
        }
    }
}

impl LeadStore for InMemoryLeadStore {
    fn documents(&self) -> Result<Vec<LeadDocument>, LeadStoreError> {
        self.documents
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| LeadStoreError::Unavailable("lead store mutex poisoned".to_string()))
    }
}

struct SampleLead {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    status: &'static str,
    move_in_date: &'static str,
    unit_type: &'static str,
    occupants: u32,
    pets: &'static str,
    notes: &'static str,
    employer: &'static str,
    move_reason: &'static str,
}

const SAMPLE_LEADS: &[SampleLead] = &[
    SampleLead {
        name: "Sarah Mitchell",
        email: "sarah.mitchell@email.com",
        phone: "(206) 555-1234",
        status: "Tour Completed",
        move_in_date: "2025-12-01",
        unit_type: "2 Bedroom",
        occupants: 2,
        pets: "1 small dog (corgi)",
        notes: "Very interested in top floor unit. Works from home 3 days/week. Needs good lighting.",
        employer: "Microsoft",
        move_reason: "Upsizing",
    },
    SampleLead {
        name: "Marcus Chen",
        email: "mchen92@email.com",
        phone: "(425) 555-5678",
        status: "Leased",
        move_in_date: "2025-01-15",
        unit_type: "1 Bedroom",
        occupants: 1,
        pets: "None",
        notes: "Signed 12-month lease. Paid first, last, and deposit.",
        employer: "Amazon",
        move_reason: "Job Relocation",
    },
    SampleLead {
        name: "Jennifer Davis",
        email: "jdavis.seattle@email.com",
        phone: "(206) 555-9012",
        status: "New Inquiry",
        move_in_date: "2025-11-11",
        unit_type: "Studio",
        occupants: 1,
        pets: "2 cats",
        notes: "First-time renter. Parent co-signer available.",
        employer: "Graduate Student - UW",
        move_reason: "First Time Renter",
    },
    SampleLead {
        name: "Ken Doll",
        email: "mymansion@email.com",
        phone: "(425) 986-1238",
        status: "Leased Elsewhere",
        move_in_date: "2025-12-31",
        unit_type: "3 Bedroom",
        occupants: 4,
        pets: "None",
        notes: "Chose competitor property closer to school.",
        employer: "Boeing",
        move_reason: "Downsizing",
    },
    SampleLead {
        name: "Ben Jamin",
        email: "beninseattle@email.com",
        phone: "(206) 555-0921",
        status: "Search Hold",
        move_in_date: "2026-05-01",
        unit_type: "Studio",
        occupants: 1,
        pets: "None",
        notes: "Waiting for current lease to end. Interested in move-in specials.",
        employer: "Freelance Designer",
        move_reason: "Other",
    },
    SampleLead {
        name: "Robert & Amy Johnson",
        email: "johnson.family@email.com",
        phone: "(425) 555-0154",
        status: "Application Submitted",
        move_in_date: "2025-03-01",
        unit_type: "3 Bedroom",
        occupants: 3,
        pets: "None",
        notes: "",
        employer: "",
        move_reason: "",
    },
];

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Leads mirroring a typical CRM snapshot, used by the demo and optional store seeding.
pub(crate) fn sample_leads() -> Vec<Lead> {
    SAMPLE_LEADS
        .iter()
        .enumerate()
        .map(|(index, sample)| Lead {
            id: LeadId(format!("sample-{:03}", index + 1)),
            name: sample.name.to_string(),
            email: sample.email.to_string(),
            phone: sample.phone.to_string(),
            status: LeadStatus::from_label(sample.status),
            move_in_date: sample.move_in_date.to_string(),
            unit_type: UnitType::from_label(sample.unit_type),
            occupants: Some(sample.occupants),
            pets: optional(sample.pets),
            notes: optional(sample.notes),
            employer: optional(sample.employer),
            move_reason: optional(sample.move_reason),
            created_at: None,
        })
        .collect()
}

pub(crate) fn parse_instant(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw).ok_or_else(|| {
        format!("failed to parse '{raw}' as YYYY-MM-DD or an ISO-8601 date-time")
    })
}
