mod patterns;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{Lead, LeadId, UrgencyTier};
use super::features::days_between;

/// Recommended contact windows and channel for the next touch with a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpResult {
    pub lead_id: LeadId,
    pub best_call_times: Vec<String>,
    pub response_window: String,
    pub recommended_method: String,
    pub urgency_level: UrgencyTier,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FollowUpError {
    #[error("invalid move-in date '{value}'")]
    InvalidMoveInDate { value: String },
}

/// Plans follow-up timing from the inquiry timestamp and move-in proximity.
///
/// Unlike scoring, an unparsable move-in date is rejected rather than defaulted.
pub fn plan(lead: &Lead, now: NaiveDateTime) -> Result<FollowUpResult, FollowUpError> {
    let move_in = lead.move_in().ok_or_else(|| FollowUpError::InvalidMoveInDate {
        value: lead.move_in_date.clone(),
    })?;

    let (urgency_level, response_window) = patterns::urgency(days_between(now, move_in));
    let plan = patterns::contact_plan(&lead.status, lead.inquired_at(now));

    Ok(FollowUpResult {
        lead_id: lead.id.clone(),
        best_call_times: plan.windows.iter().map(|window| window.to_string()).collect(),
        response_window: response_window.to_string(),
        recommended_method: plan.method.to_string(),
        urgency_level,
    })
}
