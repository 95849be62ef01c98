use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use sentimentd_errors::Problem;

use crate::domain::service::Service;

use super::dto::{AnalyzeRequest, AnalyzeResponse, HealthDto};
use super::error::{domain_error_to_problem, json_rejection_to_problem, trace_id};

/// Score the sentiment of a piece of text.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Sentiment",
    operation_id = "sentiment.analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Polarity of the submitted text", body = AnalyzeResponse),
        (status = 400, description = "Malformed JSON body", body = Problem, content_type = "application/problem+json"),
        (status = 415, description = "Body is not JSON", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "`text` is not a string", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Scorer failure", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn analyze(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    headers: HeaderMap,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, Problem> {
    let Json(req) = payload.map_err(|rej| {
        json_rejection_to_problem(rej.status(), &rej.body_text(), uri.path(), trace_id(&headers))
    })?;

    let polarity = svc
        .analyze(&req.into_text())
        .map_err(|e| domain_error_to_problem(&e, uri.path(), trace_id(&headers)))?;

    Ok(Json(polarity.into()))
}

/// Liveness probe reporting the active scorer.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Sentiment",
    operation_id = "sentiment.health",
    responses((status = 200, description = "Service is up", body = HealthDto))
)]
pub async fn health(Extension(svc): Extension<Arc<Service>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_owned(),
        scorer: svc.scorer_id().to_owned(),
    })
}
