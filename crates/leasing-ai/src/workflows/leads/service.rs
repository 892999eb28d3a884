use std::sync::Arc;

use chrono::NaiveDateTime;

use super::analytics::{self, ConversionReport};
use super::bulk::{self, BulkScoreResult};
use super::domain::Lead;
use super::followup::{self, FollowUpError, FollowUpResult};
use super::repository::{LeadStore, LeadStoreError};
use super::scoring::{ScoreResult, ScoringEngine, ScoringError, ScoringWeights};

/// Service composing the scoring engine, follow-up planner, and historical lead store.
pub struct LeadIntelligenceService<S> {
    engine: Arc<ScoringEngine>,
    store: Arc<S>,
}

impl<S> LeadIntelligenceService<S>
where
    S: LeadStore + 'static,
{
    pub fn new(store: Arc<S>, weights: ScoringWeights) -> Self {
        Self {
            engine: Arc::new(ScoringEngine::new(weights)),
            store,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn score(&self, lead: &Lead, now: NaiveDateTime) -> Result<ScoreResult, LeadServiceError> {
        Ok(self.engine.score(lead, now)?)
    }

    pub fn follow_up(
        &self,
        lead: &Lead,
        now: NaiveDateTime,
    ) -> Result<FollowUpResult, LeadServiceError> {
        Ok(followup::plan(lead, now)?)
    }

    pub fn bulk_score(&self, leads: &[Lead], now: NaiveDateTime) -> BulkScoreResult {
        bulk::bulk_score(&self.engine, leads, now)
    }

    pub fn conversion_factors(&self) -> Result<ConversionReport, LeadServiceError> {
        Ok(analytics::conversion_factors(self.store.as_ref())?)
    }
}

/// Error raised by the lead service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    FollowUp(#[from] FollowUpError),
    #[error(transparent)]
    Store(#[from] LeadStoreError),
}
