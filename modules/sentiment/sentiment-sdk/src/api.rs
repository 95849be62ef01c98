//! `PolarityScorer` trait definition.

use crate::errors::SentimentError;
use crate::models::Polarity;

/// Sentiment-scoring capability.
///
/// Implementations must be deterministic for a given input, synchronous and
/// free of side effects. The returned polarity is always within `[-1.0, 1.0]`,
/// which `Polarity` enforces by construction.
pub trait PolarityScorer: Send + Sync {
    /// Stable identifier of the backend, e.g. `"lexicon"`.
    fn id(&self) -> &str;

    /// Score `text` as-is. Empty or whitespace-only text scores `Polarity::NEUTRAL`.
    ///
    /// # Errors
    /// Returns `SentimentError` when the backend cannot produce a score.
    fn score(&self, text: &str) -> Result<Polarity, SentimentError>;
}
