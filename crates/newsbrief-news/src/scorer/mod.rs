//! Sentiment scoring for article summaries.
//!
//! Two independent signals are computed for each text: a compound valence
//! score and an averaged word polarity. Their mean is mapped onto the
//! five-step [`SentimentCategory`] scale.

mod compound;
mod lexicon;
mod polarity;

use std::collections::HashMap;

use crate::types::SentimentCategory;

/// Both signals and their mean for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    /// Compound valence score in `[-1.0, 1.0]`.
    pub compound: f64,
    /// Averaged word polarity in `[-1.0, 1.0]`.
    pub polarity: f64,
}

impl SentimentScores {
    /// Mean of the two signals.
    #[must_use]
    pub fn combined(&self) -> f64 {
        (self.compound + self.polarity) / 2.0
    }

    #[must_use]
    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_score(self.combined())
    }
}

/// Stateless scorer holding the word tables.
///
/// Build once and share; scoring never mutates it.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    valence: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    polarity: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl SentimentScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            valence: lexicon::VALENCE.iter().copied().collect(),
            boosters: lexicon::BOOSTERS.iter().copied().collect(),
            polarity: lexicon::POLARITY.iter().copied().collect(),
            intensifiers: lexicon::INTENSIFIERS.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn scores(&self, text: &str) -> SentimentScores {
        let tokens = lexicon::tokenize(text);
        SentimentScores {
            compound: compound::compound_score(text, &tokens, &self.valence, &self.boosters),
            polarity: polarity::polarity_score(&tokens, &self.polarity, &self.intensifiers),
        }
    }

    /// Classify a text. Deterministic for a given input.
    #[must_use]
    pub fn classify(&self, text: &str) -> SentimentCategory {
        self.scores(text).category()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
