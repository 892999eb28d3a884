//! Lead scoring, follow-up planning, and conversion analytics for the leasing pipeline.
//!
//! Every computation takes the evaluation instant explicitly; only the HTTP router and the CLI
//! read the wall clock.

pub mod analytics;
pub mod bulk;
pub mod domain;
pub mod features;
pub mod followup;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use analytics::{conversion_factors, ConversionReport};
pub use bulk::{bulk_score, BulkScoreResult};
pub use domain::{parse_timestamp, Lead, LeadId, LeadStatus, PriorityTier, UnitType, UrgencyTier};
pub use features::{extract, FeatureSet};
pub use followup::{plan, FollowUpError, FollowUpResult};
pub use repository::{CsvLeadStore, LeadDocument, LeadStore, LeadStoreError};
pub use router::lead_router;
pub use scoring::{ScoreFactors, ScoreResult, ScoringEngine, ScoringError, ScoringWeights};
pub use service::{LeadIntelligenceService, LeadServiceError};
