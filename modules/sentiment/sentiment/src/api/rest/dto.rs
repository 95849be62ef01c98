use sentiment_sdk::Polarity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /analyze`. Only `text` is read; other fields are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Text to score. Absent or `null` is treated as an empty string.
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalyzeRequest {
    #[must_use]
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Sentiment polarity in `[-1.0, 1.0]`.
    #[schema(minimum = -1.0, maximum = 1.0)]
    pub score: f64,
}

impl From<Polarity> for AnalyzeResponse {
    fn from(polarity: Polarity) -> Self {
        Self {
            score: polarity.value(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub scorer: String,
}
