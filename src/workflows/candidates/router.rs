use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::CandidateInput;
use super::repository::CandidateRepository;
use super::service::{CandidateIntakeError, CandidateIntakeService};

/// Router builder exposing the HTTP endpoint for candidate intake.
pub fn candidate_router<R>(service: Arc<CandidateIntakeService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/candidates", post(add_candidate_handler::<R>))
        .with_state(service)
}

pub(crate) async fn add_candidate_handler<R>(
    State(service): State<Arc<CandidateIntakeService<R>>>,
    axum::Json(input): axum::Json<CandidateInput>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.add_candidate(input).await {
        Ok(saved) => (StatusCode::CREATED, axum::Json(saved)).into_response(),
        Err(CandidateIntakeError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ CandidateIntakeError::DuplicateEmail) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
