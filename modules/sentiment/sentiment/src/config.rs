use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for the `sentiment` module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentConfig {
    /// Terms added to (or overriding) the built-in lexicon, `term -> polarity`.
    #[serde(default)]
    pub extra_terms: BTreeMap<String, f64>,
}

impl SentimentConfig {
    /// Parse the module section of the application config.
    ///
    /// A missing section yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the section does not match the schema or fails validation.
    pub fn from_module_value(value: Option<&serde_json::Value>) -> anyhow::Result<Self> {
        let cfg = match value {
            Some(v) if !v.is_null() => serde_json::from_value::<Self>(v.clone())
                .map_err(|e| anyhow::anyhow!("invalid sentiment module config: {e}"))?,
            _ => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    /// Returns an error when a term is blank or its polarity is outside `[-1.0, 1.0]`.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (term, polarity) in &self.extra_terms {
            if term.trim().is_empty() {
                anyhow::bail!("sentiment.extra_terms contains a blank term");
            }
            if !polarity.is_finite() || !(-1.0..=1.0).contains(polarity) {
                anyhow::bail!(
                    "sentiment.extra_terms['{term}'] = {polarity} is outside [-1.0, 1.0]"
                );
            }
        }
        Ok(())
    }
}
