use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Opaque identifier carried through from the CRM record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

/// Stage of the leasing funnel. Labels outside the known pipeline are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadStatus {
    NewInquiry,
    Contacted,
    TourScheduled,
    TourCompleted,
    ApplicationSubmitted,
    Approved,
    Leased,
    Rejected,
    Other(String),
}

impl LeadStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "New Inquiry" => Self::NewInquiry,
            "Contacted" => Self::Contacted,
            "Tour Scheduled" => Self::TourScheduled,
            "Tour Completed" => Self::TourCompleted,
            "Application Submitted" => Self::ApplicationSubmitted,
            "Approved" => Self::Approved,
            "Leased" => Self::Leased,
            "Rejected" => Self::Rejected,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::NewInquiry => "New Inquiry",
            Self::Contacted => "Contacted",
            Self::TourScheduled => "Tour Scheduled",
            Self::TourCompleted => "Tour Completed",
            Self::ApplicationSubmitted => "Application Submitted",
            Self::Approved => "Approved",
            Self::Leased => "Leased",
            Self::Rejected => "Rejected",
            Self::Other(label) => label,
        }
    }

    /// Statuses counted as a successful conversion in historical reporting.
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Leased | Self::Approved)
    }
}

impl From<String> for LeadStatus {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<LeadStatus> for String {
    fn from(value: LeadStatus) -> Self {
        value.label().to_string()
    }
}

/// Floor plan requested by the prospect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
    Other(String),
}

impl UnitType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Studio" => Self::Studio,
            "1 Bedroom" => Self::OneBedroom,
            "2 Bedroom" => Self::TwoBedroom,
            "3 Bedroom" => Self::ThreeBedroom,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Studio => "Studio",
            Self::OneBedroom => "1 Bedroom",
            Self::TwoBedroom => "2 Bedroom",
            Self::ThreeBedroom => "3 Bedroom",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for UnitType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<UnitType> for String {
    fn from(value: UnitType) -> Self {
        value.label().to_string()
    }
}

/// Prospective tenant inquiry as submitted by the CRM front end.
///
/// Dates stay as raw strings: the scorer degrades on a bad move-in date while the follow-up
/// planner rejects it, so parsing is left to each consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub move_in_date: String,
    pub unit_type: UnitType,
    #[serde(default)]
    pub occupants: Option<u32>,
    #[serde(default)]
    pub pets: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub move_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Lead {
    pub fn move_in(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.move_in_date)
    }

    /// Inquiry timestamp, falling back to `now` when absent, blank, or unparsable.
    pub fn inquired_at(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self.created_at.as_deref().filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
                tracing::warn!(lead_id = %self.id.0, created_at = raw, "unparsable inquiry timestamp, using now");
                now
            }),
            None => now,
        }
    }

    pub fn occupant_count(&self) -> u32 {
        match self.occupants {
            Some(count) if count > 0 => count,
            _ => 1,
        }
    }
}

/// Accepts calendar dates, naive ISO-8601 date-times, and RFC 3339 timestamps.
///
/// Offsets are dropped after conversion so the wall-clock time of the sender is kept.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.naive_local())
}

/// Coarse bucket derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    Low,
    Medium,
    High,
}

/// How quickly the first follow-up must happen, derived from move-in proximity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyTier {
    Critical,
    High,
    Standard,
}
