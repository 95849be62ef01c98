//! Sentiment SDK
//!
//! This crate provides the public contract of the sentiment module:
//! - `PolarityScorer` trait, the swappable sentiment-scoring capability
//! - Model type (`Polarity`)
//! - Error type (`SentimentError`)
//!
//! Any backend that maps text to a polarity in `[-1.0, 1.0]` deterministically
//! and without side effects can implement `PolarityScorer`:
//! ```ignore
//! let scorer: Arc<dyn PolarityScorer> = Arc::new(MyScorer::default());
//! let polarity = scorer.score("I love this")?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::PolarityScorer;
pub use errors::SentimentError;
pub use models::Polarity;
