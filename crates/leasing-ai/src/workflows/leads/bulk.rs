use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{Lead, PriorityTier};
use super::scoring::{ScoreResult, ScoringEngine};

/// Dashboard payload for a batch of scored leads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulkScoreResult {
    pub scores: Vec<ScoreResult>,
    pub high_priority_count: usize,
    pub medium_priority_count: usize,
    pub low_priority_count: usize,
}

impl BulkScoreResult {
    fn push(&mut self, result: ScoreResult) {
        match result.priority {
            PriorityTier::High => self.high_priority_count += 1,
            PriorityTier::Medium => self.medium_priority_count += 1,
            PriorityTier::Low => self.low_priority_count += 1,
        }
        self.scores.push(result);
    }
}

/// Scores each lead independently. Leads that fail to score are logged and left out.
pub fn bulk_score(engine: &ScoringEngine, leads: &[Lead], now: NaiveDateTime) -> BulkScoreResult {
    leads
        .iter()
        .fold(BulkScoreResult::default(), |mut batch, lead| {
            match engine.score(lead, now) {
                Ok(result) => batch.push(result),
                Err(err) => warn!(lead_id = %lead.id.0, error = %err, "dropping lead from bulk score"),
            }
            batch
        })
}
