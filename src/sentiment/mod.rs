//! Headline sentiment scoring.
//!
//! Scores are polarities in [-1, 1]: negative for bad news, positive for
//! good news, 0.0 for neutral or unscorable text. The lexicon backend is an
//! explicit configuration choice and is always reported back to the caller.

mod lexicon;

pub use lexicon::Lexicon;

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Non-greedy match of an HTML-like tag.
const TAG_PATTERN: &str = "<[^<]+?>";

/// Number of preceding tokens searched for a negation.
const NEGATION_WINDOW: usize = 3;

/// Factor applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;

/// Which lexicon scores the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBackend {
    /// French financial-news lexicon.
    #[default]
    French,
    /// General-purpose English lexicon.
    Generic,
}

impl SentimentBackend {
    fn lexicon(self) -> &'static Lexicon {
        match self {
            Self::French => &lexicon::FRENCH,
            Self::Generic => &lexicon::GENERIC,
        }
    }
}

impl std::fmt::Display for SentimentBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexicon().name)
    }
}

/// Lexicon-based polarity scorer.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    backend: SentimentBackend,
    words: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: &'static [&'static str],
    tag_pattern: Option<Regex>,
}

impl SentimentScorer {
    /// Build a scorer for the given backend.
    pub fn new(backend: SentimentBackend) -> Result<Self> {
        let tag_pattern = Regex::new(TAG_PATTERN).map_err(|e| Error::application(e.to_string()))?;
        let mut scorer = Self::without_tag_pattern(backend);
        scorer.tag_pattern = Some(tag_pattern);
        tracing::info!("Sentiment backend: {}", backend);
        Ok(scorer)
    }

    fn without_tag_pattern(backend: SentimentBackend) -> Self {
        let lexicon = backend.lexicon();
        Self {
            backend,
            words: lexicon.words.iter().copied().collect(),
            intensifiers: lexicon.intensifiers.iter().copied().collect(),
            negations: lexicon.negations,
            tag_pattern: None,
        }
    }

    /// The backend producing every score from this scorer.
    pub fn backend(&self) -> SentimentBackend {
        self.backend
    }

    /// Score a piece of text, substituting 0.0 for any failure.
    pub fn score(&self, text: &str) -> f64 {
        self.try_score(text).unwrap_or_else(|e| {
            tracing::warn!("Error analyzing sentiment: {}", e);
            0.0
        })
    }

    /// Score a piece of text.
    pub fn try_score(&self, text: &str) -> Result<f64> {
        let clean = self.strip_tags(text)?;
        let polarity = self.polarity(&clean);
        if !polarity.is_finite() {
            return Err(Error::application(format!(
                "non-finite polarity for {:?}",
                clean
            )));
        }
        Ok(polarity)
    }

    /// Remove HTML-like tags.
    pub fn strip_tags(&self, text: &str) -> Result<String> {
        let pattern = self
            .tag_pattern
            .as_ref()
            .ok_or_else(|| Error::application("tag stripper unavailable"))?;
        Ok(pattern.replace_all(text, "").into_owned())
    }

    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let mut total = 0.0;
        let mut count = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.words.get(*token) else {
                continue;
            };

            let mut value = base;
            if i > 0
                && let Some(&factor) = self.intensifiers.get(tokens[i - 1])
            {
                value *= factor;
            }
            let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
            if window
                .iter()
                .any(|t| self.negations.iter().any(|n| n == t))
            {
                value *= NEGATION_FACTOR;
            }

            total += value;
            count += 1;
        }

        if count == 0 {
            return 0.0;
        }
        (total / count as f64).clamp(-1.0, 1.0)
    }
}
