use chrono::{Datelike, NaiveDateTime, Timelike};

use super::super::domain::{LeadStatus, UrgencyTier};

/// Contact plan chosen from the inquiry pattern or a status override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContactPlan {
    pub windows: [&'static str; 2],
    pub method: &'static str,
}

const WEEKEND: ContactPlan = ContactPlan {
    windows: ["Today 11:00 AM - 1:00 PM", "Today 3:00 PM - 6:00 PM"],
    method: "Call directly - weekend inquirers are usually ready to talk",
};

const MORNING: ContactPlan = ContactPlan {
    windows: [
        "Today 12:00 PM - 1:00 PM (lunch break)",
        "Today 5:30 PM - 7:00 PM (after work)",
    ],
    method: "Email immediately, call at suggested times",
};

const AFTERNOON: ContactPlan = ContactPlan {
    windows: ["Today 5:00 PM - 7:00 PM", "Tomorrow 10:00 AM - 11:00 AM"],
    method: "Email with virtual tour link, follow up with call",
};

const AFTER_HOURS: ContactPlan = ContactPlan {
    windows: [
        "Next business day 10:00 AM - 12:00 PM",
        "Next business day 5:00 PM - 7:00 PM",
    ],
    method: "Email immediately (they're researching), call next day",
};

struct StatusOverride {
    status: LeadStatus,
    plan: ContactPlan,
}

fn status_overrides() -> [StatusOverride; 2] {
    [
        StatusOverride {
            status: LeadStatus::TourScheduled,
            plan: ContactPlan {
                windows: ["24 hours before tour", "Morning of tour"],
                method: "Text reminder preferred, email backup",
            },
        },
        StatusOverride {
            status: LeadStatus::TourCompleted,
            plan: ContactPlan {
                windows: ["Within 2 hours of tour", "Next morning if evening tour"],
                method: "Thank you text, then call for feedback",
            },
        },
    ]
}

/// Saturday and Sunday inquiries win over any time-of-day bucket.
pub(crate) fn inquiry_pattern(inquired_at: NaiveDateTime) -> ContactPlan {
    if inquired_at.weekday().num_days_from_monday() >= 5 {
        return WEEKEND;
    }

    match inquired_at.hour() {
        9..=12 => MORNING,
        13..=17 => AFTERNOON,
        _ => AFTER_HOURS,
    }
}

/// First matching status override replaces the pattern-based plan.
pub(crate) fn contact_plan(status: &LeadStatus, inquired_at: NaiveDateTime) -> ContactPlan {
    status_overrides()
        .into_iter()
        .find(|rule| &rule.status == status)
        .map(|rule| rule.plan)
        .unwrap_or_else(|| inquiry_pattern(inquired_at))
}

pub(crate) fn urgency(days_until_move: i64) -> (UrgencyTier, &'static str) {
    match days_until_move {
        d if d < 30 => (UrgencyTier::Critical, "Within 1 hour"),
        d if d < 60 => (UrgencyTier::High, "Within 2-4 hours"),
        _ => (UrgencyTier::Standard, "Within 24 hours"),
    }
}
