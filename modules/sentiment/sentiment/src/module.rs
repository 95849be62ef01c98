//! Module declaration for the sentiment module.

use std::sync::Arc;

use axum::Router;
use sentiment_sdk::PolarityScorer;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::SentimentConfig;
use crate::domain::service::Service;
use crate::infra::lexicon::LexiconScorer;

/// Sentiment module.
///
/// Owns the scoring service and exposes its REST routes. The scorer defaults
/// to the built-in lexicon; any `PolarityScorer` can be plugged in instead.
#[derive(Debug, Clone)]
pub struct SentimentModule {
    service: Arc<Service>,
}

impl SentimentModule {
    pub const NAME: &'static str = "sentiment";

    /// Build the module with the lexicon scorer configured from `cfg`.
    ///
    /// # Errors
    /// Returns an error if the config fails validation.
    pub fn init(cfg: &SentimentConfig) -> anyhow::Result<Self> {
        info!("Initializing sentiment module");
        cfg.validate()?;

        let scorer =
            LexiconScorer::new().with_terms(cfg.extra_terms.iter().map(|(t, p)| (t, *p)));
        debug!(
            terms = scorer.term_count(),
            extra_terms = cfg.extra_terms.len(),
            "Loaded sentiment lexicon"
        );

        let module = Self::with_scorer(Arc::new(scorer));
        info!(scorer = module.service.scorer_id(), "Sentiment module initialized");
        Ok(module)
    }

    /// Build the module around an externally supplied scorer.
    #[must_use]
    pub fn with_scorer(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self {
            service: Arc::new(Service::new(scorer)),
        }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// REST routes: `POST /analyze`, `GET /health`, `GET /openapi.json`.
    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(self.service())
    }
}
