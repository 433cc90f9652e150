use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use brainly::assessment::{
    assessment_router, AnswerSheetImporter, AssessmentService, DraftRepository, GeneratedReport,
};
use brainly::error::AppError;
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportReportRequest {
    /// CSV text with a `Question ID,Answer` header.
    pub(crate) answer_sheet: String,
}

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: DraftRepository + 'static,
{
    let import = axum::Router::new()
        .route(
            "/api/v1/assessment/report/import",
            axum::routing::post(import_report_endpoint::<R>),
        )
        .with_state(service.clone());

    assessment_router(service)
        .merge(import)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn import_report_endpoint<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(payload): Json<ImportReportRequest>,
) -> Result<Json<GeneratedReport>, AppError>
where
    R: DraftRepository + 'static,
{
    let reader = Cursor::new(payload.answer_sheet.into_bytes());
    let answers = AnswerSheetImporter::new(service.engine().catalog()).import_reader(reader)?;
    let report = service.report(&answers);

    info!(
        answered = answers.len(),
        overall_score = report.overall_score,
        "answer sheet scored"
    );
    Ok(Json(report))
}
