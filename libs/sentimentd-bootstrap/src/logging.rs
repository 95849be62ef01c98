use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

use crate::config::{LogFormat, LoggingConfig};

/// Filter from `RUST_LOG`, falling back to `logging.console_level`.
fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.console_level))
        .unwrap_or_else(|e| {
            eprintln!(
                "invalid logging.console_level '{}': {e}; falling back to 'info'",
                cfg.console_level
            );
            EnvFilter::new("info")
        })
}

/// Install the global subscriber: console output in text or JSON, plus the
/// `log` -> `tracing` bridge.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging(cfg: &LoggingConfig) {
    if tracing_log::LogTracer::init().is_err() {
        return;
    }

    let filter = build_filter(cfg);
    let result = match cfg.format {
        LogFormat::Text => tracing::subscriber::set_global_default(
            Registry::default()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true)),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            Registry::default().with(filter).with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(false),
            ),
        ),
    };

    if let Err(e) = result {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
