use axum::http::{HeaderMap, StatusCode};
use sentimentd_errors::{Problem, finalize};

use crate::domain::error::DomainError;

pub const CODE_INVALID_BODY: &str = "SENTIMENT_INVALID_BODY";
pub const CODE_SCORING_FAILED: &str = "SENTIMENT_SCORING_FAILED";

/// Request id from `x-request-id`, falling back to the current span id.
#[must_use]
pub fn trace_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
        .or_else(|| {
            tracing::Span::current()
                .id()
                .map(|id| id.into_u64().to_string())
        })
}

/// Map domain error to RFC 9457 Problem. The service has already logged it.
pub fn domain_error_to_problem(
    e: &DomainError,
    instance: &str,
    trace_id: Option<String>,
) -> Problem {
    match e {
        DomainError::Scoring(_) => finalize(
            Problem::internal_error("Sentiment scoring failed").with_code(CODE_SCORING_FAILED),
            instance,
            trace_id,
        ),
    }
}

/// Map a rejected JSON body (bad syntax, wrong content type, wrong field type).
pub fn json_rejection_to_problem(
    status: StatusCode,
    detail: &str,
    instance: &str,
    trace_id: Option<String>,
) -> Problem {
    tracing::debug!(status = status.as_u16(), detail, "Rejected request body");
    finalize(
        Problem::from_status(status, detail).with_code(CODE_INVALID_BODY),
        instance,
        trace_id,
    )
}
