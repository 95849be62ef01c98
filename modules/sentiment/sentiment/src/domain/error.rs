use sentiment_sdk::SentimentError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Scoring failed: {0}")]
    Scoring(#[from] SentimentError),
}
