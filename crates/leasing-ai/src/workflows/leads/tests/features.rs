use super::common::*;
use crate::workflows::leads::features::{extract, FALLBACK_DAYS_UNTIL_MOVE};

#[test]
fn unknown_status_and_unit_fall_back_to_table_defaults() {
    let features = extract(&lead("Leased Elsewhere", "Penthouse", &move_in_after(40)), now());

    assert_eq!(features.status_score, 5);
    assert_close(features.unit_demand_factor, 0.5);
}

#[test]
fn terminal_statuses_score_as_unmatched() {
    for status in ["Leased", "Rejected"] {
        let features = extract(&lead(status, "Studio", &move_in_after(40)), now());
        assert_eq!(features.status_score, 5, "{status} should use the default");
    }
}

#[test]
fn pipeline_statuses_follow_lookup_table() {
    let expected = [
        ("New Inquiry", 10),
        ("Contacted", 20),
        ("Tour Scheduled", 40),
        ("Tour Completed", 60),
        ("Application Submitted", 80),
        ("Approved", 90),
    ];
    for (status, score) in expected {
        let features = extract(&lead(status, "Studio", &move_in_after(40)), now());
        assert_eq!(features.status_score, score, "status {status}");
    }
}

#[test]
fn unit_demand_follows_lookup_table() {
    let expected = [
        ("Studio", 0.7),
        ("1 Bedroom", 0.8),
        ("2 Bedroom", 0.9),
        ("3 Bedroom", 0.6),
        ("2 bedroom", 0.5),
    ];
    for (unit, factor) in expected {
        let features = extract(&lead("Contacted", unit, &move_in_after(40)), now());
        assert_close(features.unit_demand_factor, factor);
    }
}

#[test]
fn unparsable_move_in_defaults_to_low_urgency() {
    let features = extract(&lead("New Inquiry", "Studio", "next spring"), now());

    assert_eq!(features.days_until_move, FALLBACK_DAYS_UNTIL_MOVE);
    assert_eq!(features.urgency_score, 20);
}

#[test]
fn past_move_in_floors_at_zero_days() {
    let features = extract(&lead("New Inquiry", "Studio", "2025-01-15"), now());

    assert_eq!(features.days_until_move, 0);
    assert_eq!(features.urgency_score, 100);
}

#[test]
fn urgency_tiers_switch_at_thirty_and_sixty_days() {
    let midnight = at(2025, 10, 15, 0, 0);
    let cases = [
        ("2025-11-13", 29, 100),
        ("2025-11-14", 30, 50),
        ("2025-12-13", 59, 50),
        ("2025-12-14", 60, 20),
    ];
    for (move_in, days, urgency) in cases {
        let features = extract(&lead("Contacted", "Studio", move_in), midnight);
        assert_eq!(features.days_until_move, days, "move-in {move_in}");
        assert_eq!(features.urgency_score, urgency, "move-in {move_in}");
    }
}

#[test]
fn partial_days_round_down() {
    let features = extract(&lead("Contacted", "Studio", "2025-10-25"), now());

    assert_eq!(features.days_until_move, 9);
}

#[test]
fn accepts_date_time_move_in_values() {
    let features = extract(&lead("Contacted", "Studio", "2025-10-25T18:30:00"), now());

    assert_eq!(features.days_until_move, 10);
}

#[test]
fn notes_must_exceed_ten_characters() {
    let mut short = lead("Contacted", "Studio", &move_in_after(40));
    short.notes = Some("short note".to_string());
    assert!(!extract(&short, now()).has_notes);

    short.notes = Some("short notes".to_string());
    assert!(extract(&short, now()).has_notes);
}

#[test]
fn completeness_flags_ignore_empty_strings() {
    let mut partial = lead("Contacted", "Studio", &move_in_after(40));
    partial.employer = Some(String::new());
    partial.move_reason = Some("Job Relocation".to_string());

    let features = extract(&partial, now());

    assert!(!features.has_employer);
    assert!(features.has_move_reason);
    assert_eq!(features.completeness_count(), 1);
}

#[test]
fn occupants_default_to_one() {
    let mut household = lead("Contacted", "Studio", &move_in_after(40));
    assert_eq!(extract(&household, now()).occupants, 1);

    household.occupants = Some(0);
    assert_eq!(extract(&household, now()).occupants, 1);

    household.occupants = Some(4);
    assert_eq!(extract(&household, now()).occupants, 4);
}
