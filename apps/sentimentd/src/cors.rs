use std::time::Duration;

use anyhow::{Result, bail};
use axum::http::{HeaderName, HeaderValue, Method};
use sentimentd_bootstrap::CorsConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Build a CORS layer from config.
///
/// # Errors
/// Returns an error if `allow_credentials` is `true` while `allowed_origins`
/// contains `"*"`, or when credentials are combined with wildcard methods or
/// headers; browsers reject both combinations.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");

    if has_wildcard_origin && cfg.allow_credentials {
        bail!(
            "CORS misconfiguration: allowed_origins=['*'] cannot be combined with \
             allow_credentials=true"
        );
    }

    if cfg.allow_credentials
        && (cfg.allowed_methods.iter().any(|m| m == "*")
            || cfg.allowed_headers.iter().any(|h| h == "*"))
    {
        bail!(
            "CORS misconfiguration: wildcard methods or headers cannot be combined with \
             allow_credentials=true"
        );
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        info!("CORS allows requests from any origin");
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| match HeaderValue::from_str(s) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %s, "Skipping invalid CORS origin");
                    None
                }
            })
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}
