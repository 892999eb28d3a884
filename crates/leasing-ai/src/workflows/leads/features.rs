use chrono::NaiveDateTime;
use serde::Serialize;

use super::domain::{Lead, LeadStatus, UnitType};

/// Days assumed until move-in when the requested date cannot be parsed.
pub const FALLBACK_DAYS_UNTIL_MOVE: u32 = 90;

const SECONDS_PER_DAY: i64 = 86_400;
const NOTES_MIN_CHARS: usize = 10;

/// Normalized signals derived from a single lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSet {
    pub days_until_move: u32,
    pub urgency_score: u8,
    pub status_score: u8,
    pub has_notes: bool,
    pub has_employer: bool,
    pub has_move_reason: bool,
    pub occupants: u32,
    pub unit_demand_factor: f64,
}

impl FeatureSet {
    /// Number of optional profile fields the prospect filled in (0..=3).
    pub fn completeness_count(&self) -> u8 {
        [self.has_notes, self.has_employer, self.has_move_reason]
            .into_iter()
            .filter(|present| *present)
            .count() as u8
    }
}

pub fn extract(lead: &Lead, now: NaiveDateTime) -> FeatureSet {
    let (days_until_move, urgency_score) = match lead.move_in() {
        Some(move_in) => {
            let days = days_between(now, move_in);
            (
                u32::try_from(days.max(0)).unwrap_or(u32::MAX),
                urgency_score(days),
            )
        }
        None => (FALLBACK_DAYS_UNTIL_MOVE, urgency_score(i64::from(FALLBACK_DAYS_UNTIL_MOVE))),
    };

    FeatureSet {
        days_until_move,
        urgency_score,
        status_score: status_score(&lead.status),
        has_notes: lead
            .notes
            .as_deref()
            .map(|notes| notes.chars().count() > NOTES_MIN_CHARS)
            .unwrap_or(false),
        has_employer: is_filled(lead.employer.as_deref()),
        has_move_reason: is_filled(lead.move_reason.as_deref()),
        occupants: lead.occupant_count(),
        unit_demand_factor: unit_demand_factor(&lead.unit_type),
    }
}

/// Whole days from `from` to `to`, rounded toward negative infinity.
pub fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().div_euclid(SECONDS_PER_DAY)
}

pub fn urgency_score(days_until_move: i64) -> u8 {
    match days_until_move {
        d if d < 30 => 100,
        d if d < 60 => 50,
        _ => 20,
    }
}

/// Funnel progress weight; statuses outside the active pipeline score 5.
pub fn status_score(status: &LeadStatus) -> u8 {
    match status {
        LeadStatus::NewInquiry => 10,
        LeadStatus::Contacted => 20,
        LeadStatus::TourScheduled => 40,
        LeadStatus::TourCompleted => 60,
        LeadStatus::ApplicationSubmitted => 80,
        LeadStatus::Approved => 90,
        LeadStatus::Leased | LeadStatus::Rejected | LeadStatus::Other(_) => 5,
    }
}

/// Static demand for each floor plan; two bedrooms lease fastest.
pub fn unit_demand_factor(unit_type: &UnitType) -> f64 {
    match unit_type {
        UnitType::Studio => 0.7,
        UnitType::OneBedroom => 0.8,
        UnitType::TwoBedroom => 0.9,
        UnitType::ThreeBedroom => 0.6,
        UnitType::Other(_) => 0.5,
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.map(|text| !text.is_empty()).unwrap_or(false)
}
