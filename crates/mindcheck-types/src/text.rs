//! Text-analysis value types.
//!
//! [`SentimentResult`] and [`Token`] are what an NLP provider hands to the
//! text scorer; [`TextSubscores`] and [`TextDetails`] are what the scorer
//! hands back.

use crate::RiskScore;
use serde::{Deserialize, Serialize};

/// Sentiment signals for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Pattern-style polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f64,
    /// Valence-style compound polarity in `[-1, 1]`, computed independently
    /// of `polarity`.
    pub compound: f64,
}

/// A token produced by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Whether every character of the token is alphabetic.
    pub is_alpha: bool,
}

impl Token {
    /// Creates a token, deriving `is_alpha` from its characters.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self { text, is_alpha }
    }
}

/// The four text subscores and the final score they combine into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSubscores {
    pub sentiment: f64,
    pub keyword: f64,
    pub linguistic: f64,
    pub emotional: f64,
    pub score: RiskScore,
}

/// Polarity split into display buckets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBreakdown {
    /// `max(0, polarity)`.
    pub positive: f64,
    /// `max(0, -polarity)`.
    pub negative: f64,
    /// `1 - |polarity|`.
    pub neutral: f64,
}

impl SentimentBreakdown {
    /// Builds the breakdown from a single polarity value.
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            positive: polarity.max(0.0),
            negative: (-polarity).max(0.0),
            neutral: 1.0 - polarity.abs(),
        }
    }
}

/// Descriptive details extracted from a piece of text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetails {
    pub sentiment_breakdown: SentimentBreakdown,
    /// Up to ten noun phrases longer than two characters.
    pub key_phrases: Vec<String>,
    /// Distinct words containing a depression-indicator term, in order of
    /// first appearance.
    pub matched_keywords: Vec<String>,
    pub word_count: usize,
    pub subjectivity: f64,
}
