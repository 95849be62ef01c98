use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(title = "sentimentd", description = "Text sentiment scoring"),
    paths(handlers::analyze, handlers::health),
    components(schemas(
        dto::AnalyzeRequest,
        dto::AnalyzeResponse,
        dto::HealthDto,
        sentimentd_errors::Problem
    )),
    tags((name = "Sentiment", description = "Sentiment scoring"))
)]
pub struct ApiDoc;

/// Routes of the sentiment module with the service attached.
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    let doc = Arc::new(ApiDoc::openapi());

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .route(
            "/openapi.json",
            get(move || {
                let doc = Arc::clone(&doc);
                async move {
                    (
                        [(header::CACHE_CONTROL, "no-store")],
                        Json(doc.as_ref().clone()),
                    )
                        .into_response()
                }
            }),
        )
        .layer(Extension(service))
}
