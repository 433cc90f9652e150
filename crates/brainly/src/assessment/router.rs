use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AnswerMap;
use super::draft::{DraftRepository, RepositoryError, SessionId};
use super::service::{AssessmentService, AssessmentServiceError, DraftSubmission};

#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub answers: AnswerMap,
}

/// Router builder exposing the questionnaire, scoring, and draft endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: DraftRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<R>))
        .route("/api/v1/assessment/report", post(report_handler::<R>))
        .route(
            "/api/v1/assessment/drafts/:session_id",
            put(save_draft_handler::<R>)
                .get(resume_draft_handler::<R>)
                .delete(discard_draft_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let view = service.engine().catalog().public_view();
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<ReportRequest>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let report = service.report(&request.answers);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn save_draft_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    Json(submission): Json<DraftSubmission>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.save_draft(SessionId(session_id), submission) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(AssessmentServiceError::Draft(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn resume_draft_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    let id = SessionId(session_id);
    match service.resume_draft(&id) {
        Ok(resumed) => (StatusCode::OK, Json(resumed)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "session_id": id.0,
                "error": "no report draft for this session",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error @ AssessmentServiceError::Expired(_)) => {
            let payload = json!({
                "session_id": id.0,
                "error": error.to_string(),
            });
            (StatusCode::GONE, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn discard_draft_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
{
    match service.discard_draft(&SessionId(session_id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
