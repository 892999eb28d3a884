mod config;
mod policy;
mod rules;

pub use config::ScoringWeights;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{Lead, LeadId, PriorityTier};
use super::features;

/// Stateless scorer applying the configured weights to extracted lead features.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, lead: &Lead, now: NaiveDateTime) -> Result<ScoreResult, ScoringError> {
        let features = features::extract(lead, now);
        let factors = rules::weighted_factors(&features, &self.weights);
        let score = rules::composite_score(&factors)?;
        let priority = policy::classify(score);
        let recommended_action = policy::recommended_action(lead, score, priority);

        Ok(ScoreResult {
            lead_id: lead.id.clone(),
            score,
            priority,
            recommended_action,
            factors,
        })
    }
}

/// Weighted contribution of each feature group, exposed for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactors {
    pub urgency: f64,
    pub engagement: f64,
    pub completeness: f64,
    pub demand: f64,
}

impl ScoreFactors {
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("urgency", self.urgency),
            ("engagement", self.engagement),
            ("completeness", self.completeness),
            ("demand", self.demand),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.urgency + self.engagement + self.completeness + self.demand
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub lead_id: LeadId,
    pub score: u8,
    pub priority: PriorityTier,
    pub recommended_action: String,
    pub factors: ScoreFactors,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("{factor} contribution is not a finite number")]
    NonFiniteContribution { factor: &'static str },
}
