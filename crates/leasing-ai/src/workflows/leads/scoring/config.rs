use serde::{Deserialize, Serialize};

/// Weights applied to each feature group when composing the lead score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub urgency: f64,
    pub engagement: f64,
    pub completeness: f64,
    pub demand: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            urgency: 0.35,
            engagement: 0.30,
            completeness: 0.20,
            demand: 0.15,
        }
    }
}
