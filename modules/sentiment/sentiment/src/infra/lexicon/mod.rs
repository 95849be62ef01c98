//! Lexicon-based `PolarityScorer`.
//!
//! Each sentiment-bearing token contributes its lexicon polarity, scaled by
//! the modifiers that precede it. A preceding negation multiplies the
//! contribution by `NEGATION_FACTOR`. Every contribution is clamped to
//! `[-1, 1]` and the final polarity is the mean of all contributions; text
//! without any hit is neutral.

mod entries;
mod tokenizer;

use std::collections::{HashMap, HashSet};

use sentiment_sdk::{Polarity, PolarityScorer, SentimentError};
use tracing::trace;

use entries::{EMOTICONS, MODIFIERS, NEGATION_FACTOR, NEGATIONS, TERMS, TRANSPARENT};
use tokenizer::{Token, tokenize};

pub const LEXICON_SCORER_ID: &str = "lexicon";

/// A single lexicon match and what it added to the score.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub term: String,
    pub contribution: f64,
}

/// Scoring result with the matches that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub polarity: Polarity,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    terms: HashMap<String, f64>,
    emoticons: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    transparent: HashSet<&'static str>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound for a compounded modifier chain; keeps long intensifier runs finite.
const MAX_MULTIPLIER: f64 = 1e6;

/// Modifier chain pending for the next sentiment-bearing token.
struct Pending {
    multiplier: f64,
    negated: bool,
}

impl Pending {
    const fn new() -> Self {
        Self {
            multiplier: 1.0,
            negated: false,
        }
    }

    fn intensify(&mut self, factor: f64) {
        self.multiplier = (self.multiplier * factor).min(MAX_MULTIPLIER);
    }

    fn apply(&self, polarity: f64) -> f64 {
        let scaled = polarity * self.multiplier;
        let signed = if self.negated {
            scaled * NEGATION_FACTOR
        } else {
            scaled
        };
        signed.clamp(-1.0, 1.0)
    }
}

impl LexiconScorer {
    /// Scorer over the built-in English lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: TERMS.iter().map(|(t, p)| ((*t).to_owned(), *p)).collect(),
            emoticons: EMOTICONS.iter().copied().collect(),
            modifiers: MODIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
            transparent: TRANSPARENT.iter().copied().collect(),
        }
    }

    /// Add or override lexicon terms. Terms are matched case-insensitively.
    #[must_use]
    pub fn with_terms<I, K>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (term, polarity) in extra {
            self.terms.insert(term.as_ref().to_lowercase(), polarity);
        }
        self
    }

    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Score `text` and report which terms matched.
    ///
    /// # Errors
    /// Returns `SentimentError::NonFinite` if a configured term carries a
    /// non-finite polarity.
    pub fn assess(&self, text: &str) -> Result<Assessment, SentimentError> {
        let mut hits = Vec::new();
        let mut pending = Pending::new();

        for token in tokenize(text) {
            match token {
                Token::Emoticon(emoticon) => {
                    if let Some(&polarity) = self.emoticons.get(emoticon) {
                        hits.push(Hit {
                            term: emoticon.to_owned(),
                            contribution: polarity,
                        });
                    }
                    pending = Pending::new();
                }
                Token::Word(word) => {
                    if self.negations.contains(word.as_str()) {
                        pending.negated = !pending.negated;
                    } else if let Some(&factor) = self.modifiers.get(word.as_str()) {
                        pending.intensify(factor);
                    } else if let Some(&polarity) = self.terms.get(&word) {
                        hits.push(Hit {
                            contribution: pending.apply(polarity),
                            term: word,
                        });
                        pending = Pending::new();
                    } else if !self.transparent.contains(word.as_str()) {
                        pending = Pending::new();
                    }
                }
            }
        }

        let polarity = if hits.is_empty() {
            Polarity::NEUTRAL
        } else {
            let sum: f64 = hits.iter().map(|h| h.contribution).sum();
            #[allow(clippy::cast_precision_loss)] // hit count is bounded by token count
            let mean = sum / hits.len() as f64;
            Polarity::new(mean)?
        };

        trace!(hits = hits.len(), score = polarity.value(), "Lexicon assessment");
        Ok(Assessment { polarity, hits })
    }
}

impl PolarityScorer for LexiconScorer {
    fn id(&self) -> &str {
        LEXICON_SCORER_ID
    }

    fn score(&self, text: &str) -> Result<Polarity, SentimentError> {
        self.assess(text).map(|a| a.polarity)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer::new().score(text).unwrap().value()
    }

    #[test]
    fn clearly_positive_text_scores_above_zero() {
        assert!(score("I love this, it is wonderful") > 0.0);
        assert!(score("What a great and beautiful day") > 0.0);
    }

    #[test]
    fn clearly_negative_text_scores_below_zero() {
        assert!(score("I hate this, it is terrible") < 0.0);
        assert!(score("awful service and a boring movie") < 0.0);
    }

    #[test]
    fn empty_and_whitespace_are_exactly_neutral() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   \n\t"), 0.0);
        assert_eq!(score("the table is made of wood"), 0.0);
    }

    #[test]
    fn score_is_mean_of_contributions() {
        let assessment = LexiconScorer::new()
            .assess("I love this, it is wonderful")
            .unwrap();
        assert_eq!(assessment.hits.len(), 2);
        assert!((assessment.polarity.value() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn ok_is_mildly_positive() {
        assert!((score("ok") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let plain = score("good");
        let negated = score("not good");
        assert!(negated < 0.0);
        assert!((negated - plain * NEGATION_FACTOR).abs() < 1e-9);
        assert!(score("this isn't bad") > 0.0);
        assert!(score("no problem at all") > 0.0);
    }

    #[test]
    fn modifiers_scale_and_compound() {
        assert!(score("very good") > score("good"));
        assert!(score("slightly good") < score("good"));
        let not_very_good = score("not very good");
        assert!((not_very_good - 0.7 * 1.3 * NEGATION_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn unrelated_word_breaks_modifier_chain() {
        assert_eq!(score("not today, good"), score("good"));
        assert!(score("not a good idea") < 0.0);
    }

    #[test]
    fn emoticons_count_as_hits() {
        assert!(score(":)") > 0.0);
        assert!(score(":(") < 0.0);
        assert!(score("meeting moved to 3pm :D") > 0.0);
        assert!(score("Thanks :).") > 0.0);
        assert!(score("(sad:(") < 0.0);
    }

    #[test]
    fn always_within_unit_interval() {
        let long = "terrible ".repeat(10_000);
        let intensified = format!("{}good", "very ".repeat(3000));
        let mixed = format!("{0}good {0}bad", "very ".repeat(3000));
        let samples = [
            "extremely absolutely incredibly perfect",
            "utterly totally completely worst",
            "best best best :D <3",
            "not not not bad",
            long.as_str(),
            intensified.as_str(),
            mixed.as_str(),
        ];
        for text in samples {
            let s = score(text);
            assert!((-1.0..=1.0).contains(&s), "{s} out of range");
        }
    }

    #[test]
    fn long_intensifier_runs_saturate() {
        let run = "very ".repeat(3000);
        assert_eq!(score(&format!("{run}good")), 1.0);
        assert_eq!(score(&format!("not {run}good")), -1.0);
        assert_eq!(score(&format!("{run}good {run}bad")), 0.0);

        let assessment = LexiconScorer::new()
            .with_terms([("fine", 0.0)])
            .assess(&format!("{run}fine"))
            .unwrap();
        assert_eq!(assessment.hits[0].contribution, 0.0);
    }

    #[test]
    fn deterministic_for_same_input() {
        let scorer = LexiconScorer::new();
        let text = "The food was good but the service was really slow";
        let first = scorer.score(text).unwrap();
        let second = scorer.score(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn extra_terms_extend_and_override() {
        let scorer = LexiconScorer::new().with_terms([("Meh", -0.2), ("ok", 0.1)]);
        assert!((scorer.score("meh").unwrap().value() + 0.2).abs() < 1e-9);
        assert!((scorer.score("ok").unwrap().value() - 0.1).abs() < 1e-9);
        assert_eq!(scorer.term_count(), LexiconScorer::new().term_count() + 1);
    }

    #[test]
    fn non_finite_term_is_reported() {
        let scorer = LexiconScorer::new().with_terms([("glitch", f64::NAN)]);
        assert!(matches!(
            scorer.score("glitch"),
            Err(SentimentError::NonFinite(_))
        ));
    }

    #[test]
    fn scorer_id_is_stable() {
        assert_eq!(LexiconScorer::new().id(), LEXICON_SCORER_ID);
    }
}
