use super::super::features::FeatureSet;
use super::config::ScoringWeights;
use super::{ScoreFactors, ScoringError};

const COMPLETENESS_POINTS_PER_FIELD: f64 = 10.0;
const DEMAND_SCALE: f64 = 100.0;

pub(crate) fn weighted_factors(features: &FeatureSet, weights: &ScoringWeights) -> ScoreFactors {
    ScoreFactors {
        urgency: f64::from(features.urgency_score) * weights.urgency,
        engagement: f64::from(features.status_score) * weights.engagement,
        completeness: f64::from(features.completeness_count())
            * COMPLETENESS_POINTS_PER_FIELD
            * weights.completeness,
        demand: features.unit_demand_factor * DEMAND_SCALE * weights.demand,
    }
}

/// Truncates the factor sum toward zero and clamps it into 0..=100.
pub(crate) fn composite_score(factors: &ScoreFactors) -> Result<u8, ScoringError> {
    for (factor, value) in factors.entries() {
        if !value.is_finite() {
            return Err(ScoringError::NonFiniteContribution { factor });
        }
    }

    let total = factors.sum().trunc().clamp(0.0, 100.0);
    Ok(total as u8)
}
