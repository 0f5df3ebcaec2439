use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::model::ReviewVerdict;

pub const PUNCTUATION_WEIGHT: f64 = 1.0;
pub const SHOUTING_WEIGHT: f64 = 1.0;
pub const SUPERLATIVE_WEIGHT: f64 = 0.5;
pub const FAKE_THRESHOLD: f64 = 1.0;

pub const SUPERLATIVES: [&str; 7] = [
    "amazing",
    "incredible",
    "best",
    "perfect",
    "worst",
    "terrible",
    "awful",
];

lazy_static::lazy_static! {
    static ref EXCESSIVE_PUNCTUATION: Regex =
        Regex::new(r"!{2,}|\?{2,}").expect("valid punctuation pattern");

    // ASCII word boundaries on both sides: a caps run glued to ASCII letters or digits
    // does not count, while one next to a non-ASCII letter ("caféGOOD") does.
    static ref SHOUTING_WORD: Regex =
        Regex::new(r"(?-u:\b)[A-Z]{4,}(?-u:\b)").expect("valid shouting pattern");

    // Plain substring match with ASCII-only case folding, so "bestseller" counts and "beſt" does not.
    static ref SUPERLATIVE: Regex =
        Regex::new(&format!("(?i-u){}", SUPERLATIVES.join("|"))).expect("valid superlative pattern");
}

/// Lexical signals extracted from a single review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFeatures {
    pub excessive_punctuation: bool,
    pub shouting_words: bool,
    pub superlatives: bool,
}

impl ReviewFeatures {
    pub fn extract(text: &str) -> Self {
        Self {
            excessive_punctuation: EXCESSIVE_PUNCTUATION.is_match(text),
            shouting_words: SHOUTING_WORD.is_match(text),
            superlatives: SUPERLATIVE.is_match(text),
        }
    }

    pub fn score(&self) -> f64 {
        let mut score = 0.0;
        if self.excessive_punctuation {
            score += PUNCTUATION_WEIGHT;
        }
        if self.shouting_words {
            score += SHOUTING_WEIGHT;
        }
        if self.superlatives {
            score += SUPERLATIVE_WEIGHT;
        }
        score
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextFakeScorer;

impl TextFakeScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_features(&self, review_text: &str) -> ReviewFeatures {
        ReviewFeatures::extract(review_text)
    }

    pub fn score(&self, review_text: &str) -> ReviewVerdict {
        let features = self.extract_features(review_text);
        let score = features.score();
        trace!(?features, score, "Review scored");

        ReviewVerdict {
            is_fake: score >= FAKE_THRESHOLD,
            score,
        }
    }
}
