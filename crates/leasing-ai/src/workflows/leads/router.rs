use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use serde_json::json;
use tracing::{error, info};

use super::domain::Lead;
use super::repository::LeadStore;
use super::service::{LeadIntelligenceService, LeadServiceError};

/// Router builder exposing the scoring, follow-up, and analytics endpoints.
pub fn lead_router<S>(service: Arc<LeadIntelligenceService<S>>) -> Router
where
    S: LeadStore + 'static,
{
    Router::new()
        .route("/", get(service_info))
        .route("/api/score-lead", post(score_handler::<S>))
        .route("/api/optimal-followup", post(follow_up_handler::<S>))
        .route("/api/bulk-score", post(bulk_score_handler::<S>))
        .route(
            "/api/analytics/conversion-factors",
            get(conversion_factors_handler::<S>),
        )
        .with_state(service)
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn service_error(err: LeadServiceError) -> Response {
    error!(error = %err, "lead request failed");
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Leasing CRM ML Service",
        "status": "online",
    }))
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<LeadIntelligenceService<S>>>,
    Json(lead): Json<Lead>,
) -> Response
where
    S: LeadStore + 'static,
{
    match service.score(&lead, now()) {
        Ok(result) => {
            info!(lead_id = %result.lead_id.0, score = result.score, priority = ?result.priority, "scored lead");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => service_error(err),
    }
}

pub(crate) async fn follow_up_handler<S>(
    State(service): State<Arc<LeadIntelligenceService<S>>>,
    Json(lead): Json<Lead>,
) -> Response
where
    S: LeadStore + 'static,
{
    match service.follow_up(&lead, now()) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => service_error(err),
    }
}

pub(crate) async fn bulk_score_handler<S>(
    State(service): State<Arc<LeadIntelligenceService<S>>>,
    Json(leads): Json<Vec<Lead>>,
) -> Response
where
    S: LeadStore + 'static,
{
    let result = service.bulk_score(&leads, now());
    info!(
        submitted = leads.len(),
        scored = result.scores.len(),
        high = result.high_priority_count,
        "bulk scored leads"
    );
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn conversion_factors_handler<S>(
    State(service): State<Arc<LeadIntelligenceService<S>>>,
) -> Response
where
    S: LeadStore + 'static,
{
    match service.conversion_factors() {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => service_error(err),
    }
}
