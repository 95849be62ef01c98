//! Sentiment Module Implementation
//!
//! The scorer contract is defined in `sentiment-sdk` and re-exported here.

pub use sentiment_sdk::{Polarity, PolarityScorer, SentimentError};

pub mod module;
pub use module::SentimentModule;

pub use config::SentimentConfig;
pub use infra::lexicon::LexiconScorer;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
