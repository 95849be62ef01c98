//! Error types for the sentiment SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentimentError {
    #[error("Scorer produced a non-finite polarity: {0}")]
    NonFinite(f64),

    #[error("Scorer '{scorer}' failed: {message}")]
    Backend { scorer: String, message: String },
}

impl SentimentError {
    #[must_use]
    pub fn backend(scorer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            scorer: scorer.into(),
            message: message.into(),
        }
    }
}
