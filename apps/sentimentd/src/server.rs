use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Router, extract::DefaultBodyLimit};
use sentiment::{SentimentConfig, SentimentModule};
use sentimentd_bootstrap::AppConfig;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::request_id::{self, MakeReqId};

/// Build the sentiment module from `modules.sentiment.config`.
///
/// # Errors
/// Returns an error if the module section is malformed or fails validation.
pub fn build_module(cfg: &AppConfig) -> Result<SentimentModule> {
    let module_cfg = SentimentConfig::from_module_value(cfg.module_config(SentimentModule::NAME))?;
    SentimentModule::init(&module_cfg)
}

fn apply_trace_layer(router: Router) -> Router {
    use tracing::field::Empty;

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(request_id::header())
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!("finished processing request");
                },
            ),
    )
}

/// Wrap the module routes in the HTTP middleware stack.
///
/// Runtime order, outermost first:
/// `SetRequestId` → `PropagateRequestId` → Trace → Timeout → `BodyLimit` → CORS → routes.
///
/// # Errors
/// Returns an error if the CORS configuration is invalid.
pub fn build_router(cfg: &AppConfig, module: &SentimentModule) -> Result<Router> {
    let mut router = module.router();

    // 6) CORS
    if cfg.cors.enabled {
        router = router.layer(crate::cors::build_cors_layer(&cfg.cors)?);
    }

    // 5) Body limit
    router = router.layer(RequestBodyLimitLayer::new(cfg.server.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.server.body_limit_bytes));

    // 4) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        axum::http::StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(cfg.server.request_timeout_secs),
    ));

    // 3) Trace
    router = apply_trace_layer(router);

    // 2) PropagateRequestId
    let x_request_id = request_id::header();
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // 1) SetRequestId (registered last, runs first)
    router = router.layer(SetRequestIdLayer::new(x_request_id, MakeReqId));

    Ok(router)
}

/// Bind `addr` and serve until `shutdown` resolves, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<F>(router: Router, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind address {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
