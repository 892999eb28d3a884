use super::super::domain::{Lead, LeadStatus, PriorityTier};

const HIGH_PRIORITY_FLOOR: u8 = 75;
const MEDIUM_PRIORITY_FLOOR: u8 = 50;
const APPLICATION_PUSH_MIN_SCORE: u8 = 60;

pub(crate) fn classify(total_score: u8) -> PriorityTier {
    if total_score >= HIGH_PRIORITY_FLOOR {
        PriorityTier::High
    } else if total_score >= MEDIUM_PRIORITY_FLOOR {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    }
}

/// Status-specific action that replaces the tier default when its predicate holds.
struct ActionOverride {
    applies: fn(&Lead, u8) -> bool,
    action: &'static str,
}

/// Evaluated top-down; the first matching rule wins.
const ACTION_OVERRIDES: &[ActionOverride] = &[
    ActionOverride {
        applies: tour_scheduled,
        action: "📅 Send tour reminder 24hrs before + parking instructions",
    },
    ActionOverride {
        applies: strong_after_tour,
        action: "📝 Send application link with fee waiver (limited time)",
    },
    ActionOverride {
        applies: application_submitted,
        action: "⚡ Fast-track application review - high conversion probability",
    },
];

fn tour_scheduled(lead: &Lead, _total_score: u8) -> bool {
    lead.status == LeadStatus::TourScheduled
}

fn strong_after_tour(lead: &Lead, total_score: u8) -> bool {
    lead.status == LeadStatus::TourCompleted && total_score > APPLICATION_PUSH_MIN_SCORE
}

fn application_submitted(lead: &Lead, _total_score: u8) -> bool {
    lead.status == LeadStatus::ApplicationSubmitted
}

pub(crate) fn recommended_action(lead: &Lead, total_score: u8, priority: PriorityTier) -> String {
    if let Some(rule) = ACTION_OVERRIDES
        .iter()
        .find(|rule| (rule.applies)(lead, total_score))
    {
        return rule.action.to_string();
    }

    match priority {
        PriorityTier::High => format!(
            "🔥 Hot lead! Call immediately - {} is ready to move",
            lead.name
        ),
        PriorityTier::Medium => format!("📞 Schedule tour ASAP for {}", lead.unit_type.label()),
        PriorityTier::Low => "📧 Send welcome email and add to nurture campaign".to_string(),
    }
}
