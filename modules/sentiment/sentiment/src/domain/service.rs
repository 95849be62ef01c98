use std::sync::Arc;

use sentiment_sdk::{Polarity, PolarityScorer};
use tracing::{debug, instrument};

use crate::domain::error::DomainError;

/// Sentiment service: hands text to the configured scorer.
///
/// Holds no per-request state; clones share the same scorer.
#[derive(Clone)]
pub struct Service {
    scorer: Arc<dyn PolarityScorer>,
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("scorer", &self.scorer.id())
            .finish()
    }
}

impl Service {
    #[must_use]
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub fn scorer_id(&self) -> &str {
        self.scorer.id()
    }

    /// Score `text` unmodified.
    ///
    /// # Errors
    /// Returns `DomainError::Scoring` when the scorer fails.
    #[instrument(skip(self, text), fields(scorer = %self.scorer.id(), text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<Polarity, DomainError> {
        let polarity = self.scorer.score(text).map_err(|e| {
            tracing::error!(error = %e, "Service: scoring failed");
            DomainError::from(e)
        })?;

        debug!(score = polarity.value(), "Scored text");
        Ok(polarity)
    }
}
