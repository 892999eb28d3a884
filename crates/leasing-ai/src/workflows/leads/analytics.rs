use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::LeadStatus;
use super::repository::{LeadDocument, LeadStore, LeadStoreError};

const UNKNOWN: &str = "Unknown";

/// Historical funnel breakdown over every stored lead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    pub by_status: BTreeMap<String, u64>,
    /// Reserved for a move-in proximity breakdown; always empty.
    pub by_days_until_move: BTreeMap<String, u64>,
    pub by_unit_type: BTreeMap<String, u64>,
    pub total_leads: u64,
    /// Percentage of leads that reached Leased or Approved.
    pub conversion_rate: f64,
}

impl ConversionReport {
    pub fn from_documents<'a>(documents: impl IntoIterator<Item = &'a LeadDocument>) -> Self {
        let mut report = Self::default();
        let mut converted: u64 = 0;

        for document in documents {
            report.total_leads += 1;

            let status = text_field(document, "status");
            if LeadStatus::from_label(status).is_converted() {
                converted += 1;
            }
            *report.by_status.entry(status.to_string()).or_default() += 1;
            *report
                .by_unit_type
                .entry(text_field(document, "unitType").to_string())
                .or_default() += 1;
        }

        if report.total_leads > 0 {
            report.conversion_rate = converted as f64 / report.total_leads as f64 * 100.0;
        }

        report
    }
}

fn text_field<'a>(document: &'a LeadDocument, key: &str) -> &'a str {
    document
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
}

pub fn conversion_factors<S>(store: &S) -> Result<ConversionReport, LeadStoreError>
where
    S: LeadStore + ?Sized,
{
    let documents = store.documents()?;
    Ok(ConversionReport::from_documents(&documents))
}
