use serde::{Deserialize, Serialize};

use crate::errors::SentimentError;

/// Sentiment polarity in the closed range `[-1.0, 1.0]`.
///
/// Negative values indicate negative sentiment, positive values positive
/// sentiment and zero neutrality. Deserialization goes through
/// [`Polarity::new`], so out-of-range numbers are clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Polarity(f64);

impl Polarity {
    pub const NEUTRAL: Self = Self(0.0);
    pub const MIN: Self = Self(-1.0);
    pub const MAX: Self = Self(1.0);

    /// Build a polarity, clamping finite values into `[-1.0, 1.0]`.
    ///
    /// # Errors
    /// Returns `SentimentError::NonFinite` for NaN or infinite input.
    pub fn new(value: f64) -> Result<Self, SentimentError> {
        if !value.is_finite() {
            return Err(SentimentError::NonFinite(value));
        }
        Ok(Self(value.clamp(Self::MIN.0, Self::MAX.0)))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl From<Polarity> for f64 {
    fn from(p: Polarity) -> Self {
        p.0
    }
}

impl TryFrom<f64> for Polarity {
    type Error = SentimentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Polarity::new(1.7).unwrap(), Polarity::MAX);
        assert_eq!(Polarity::new(-3.0).unwrap(), Polarity::MIN);
        assert_eq!(Polarity::new(0.25).unwrap().value(), 0.25);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Polarity::new(f64::NAN),
            Err(SentimentError::NonFinite(_))
        ));
        assert_eq!(
            Polarity::new(f64::INFINITY),
            Err(SentimentError::NonFinite(f64::INFINITY))
        );
    }

    #[test]
    fn neutral_is_default_and_zero() {
        assert_eq!(Polarity::default(), Polarity::NEUTRAL);
        assert!(!Polarity::NEUTRAL.is_positive());
        assert!(!Polarity::NEUTRAL.is_negative());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Polarity::new(-0.5).unwrap()).unwrap();
        assert_eq!(json, "-0.5");
    }

    #[test]
    fn deserialization_clamps_like_new() {
        let high: Polarity = serde_json::from_str("5.0").unwrap();
        assert_eq!(high, Polarity::MAX);
        let low: Polarity = serde_json::from_str("-2").unwrap();
        assert_eq!(low, Polarity::MIN);
        let inside: Polarity = serde_json::from_str("-0.25").unwrap();
        assert_eq!(inside.value(), -0.25);
    }
}
