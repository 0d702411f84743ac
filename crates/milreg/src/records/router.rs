use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::PersonSubmission;
use super::service::AdvisoryService;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub person: PersonSubmission,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAdviceRequest {
    pub persons: Vec<PersonSubmission>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router exposing single and batch advice plus the active catalog.
pub fn advisory_router(service: Arc<AdvisoryService>) -> Router {
    Router::new()
        .route("/api/v1/persons/advice", post(advice_handler))
        .route("/api/v1/persons/advice/batch", post(batch_handler))
        .route("/api/v1/rules", get(rules_handler))
        .with_state(service)
}

pub(crate) async fn advice_handler(
    State(service): State<Arc<AdvisoryService>>,
    axum::Json(request): axum::Json<AdviceRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(AdvisoryService::today);
    match service.advise(&request.person, today) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<AdvisoryService>>,
    axum::Json(request): axum::Json<BatchAdviceRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(AdvisoryService::today);
    let view = service.advise_batch(&request.persons, today);
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn rules_handler(State(service): State<Arc<AdvisoryService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog_view())).into_response()
}
