use mindcheck_types::{SentimentResult, Token};
use std::collections::HashMap;

/// Natural-language primitives consumed by the text scorer.
///
/// Implementations must be pure: the same input yields the same output and
/// no call mutates shared state, so one provider can serve concurrent
/// requests.
pub trait NlpProvider {
    /// Computes polarity, subjectivity and compound sentiment for `text`.
    fn sentiment(&self, text: &str) -> SentimentResult;

    /// Splits `text` into word and punctuation tokens.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Returns the noun-phrase chunks of `text` in order of appearance.
    fn noun_chunks(&self, text: &str) -> Vec<String>;
}

/// A fixture provider returning canned results.
///
/// Sentiment is looked up by exact text with a fallback value, tokens come
/// from whitespace splitting, and noun chunks are looked up by exact text.
#[derive(Debug, Clone, Default)]
pub struct StaticNlp {
    sentiments: HashMap<String, SentimentResult>,
    fallback: SentimentResult,
    chunks: HashMap<String, Vec<String>>,
}

impl StaticNlp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a provider that reports `fallback` for every input.
    pub fn with_sentiment(fallback: SentimentResult) -> Self {
        Self {
            fallback,
            ..Self::default()
        }
    }

    /// Returns a provider whose polarity and compound both equal `value`.
    pub fn with_polarity(value: f64) -> Self {
        Self::with_sentiment(SentimentResult {
            polarity: value,
            subjectivity: 0.5,
            compound: value,
        })
    }

    pub fn insert_sentiment(&mut self, text: &str, sentiment: SentimentResult) {
        self.sentiments.insert(text.to_string(), sentiment);
    }

    pub fn insert_chunks(&mut self, text: &str, chunks: Vec<String>) {
        self.chunks.insert(text.to_string(), chunks);
    }
}

impl NlpProvider for StaticNlp {
    fn sentiment(&self, text: &str) -> SentimentResult {
        self.sentiments.get(text).copied().unwrap_or(self.fallback)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }

    fn noun_chunks(&self, text: &str) -> Vec<String> {
        self.chunks.get(text).cloned().unwrap_or_default()
    }
}
