use crate::lexicon::Lexicon;
use crate::nlp::NlpProvider;
use crate::subscores::{
    combine_subscores, contains_any, emotional_subscore, is_insufficient, keyword_subscore,
    linguistic_subscore, preprocess, sentiment_subscore,
};
use mindcheck_types::{RiskScore, SentimentBreakdown, TextDetails, TextSubscores};
use std::sync::Arc;

/// Maximum number of key phrases reported in [`TextDetails`].
pub const MAX_KEY_PHRASES: usize = 10;

/// Scores free-form text on the `[0, 10]` risk scale.
///
/// Holds only immutable, shared configuration; a single scorer can serve
/// any number of concurrent calls.
pub struct TextRiskScorer<P> {
    nlp: Arc<P>,
    lexicon: Arc<Lexicon>,
}

impl<P> Clone for TextRiskScorer<P> {
    fn clone(&self) -> Self {
        Self {
            nlp: Arc::clone(&self.nlp),
            lexicon: Arc::clone(&self.lexicon),
        }
    }
}

impl<P: NlpProvider> TextRiskScorer<P> {
    /// Creates a scorer over an initialised provider and lexicon.
    pub fn new(nlp: Arc<P>, lexicon: Arc<Lexicon>) -> Self {
        Self { nlp, lexicon }
    }

    /// Creates a scorer using the built-in lexicon.
    pub fn with_default_lexicon(nlp: Arc<P>) -> Self {
        Self::new(nlp, Arc::new(Lexicon::default()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the text risk score.
    ///
    /// Text with fewer than ten trimmed characters scores exactly `5.0`.
    pub fn score(&self, text: &str) -> RiskScore {
        self.breakdown(text)
            .map(|subscores| subscores.score)
            .unwrap_or(RiskScore::NEUTRAL)
    }

    /// Returns all four subscores and the final score, or `None` when the
    /// text is too short to analyse.
    pub fn breakdown(&self, text: &str) -> Option<TextSubscores> {
        if is_insufficient(text) {
            tracing::debug!(chars = text.trim().chars().count(), "text too short to score");
            return None;
        }

        let cleaned = preprocess(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let sentiment = sentiment_subscore(&self.nlp.sentiment(&cleaned));
        let keyword = keyword_subscore(&words, &self.lexicon);
        let linguistic = linguistic_subscore(&self.nlp.tokenize(&cleaned), &self.lexicon);
        let emotional = emotional_subscore(&words, &self.lexicon);
        let score = combine_subscores(sentiment, keyword, linguistic, emotional);

        tracing::debug!(
            words = words.len(),
            sentiment,
            keyword,
            linguistic,
            emotional,
            score = score.value(),
            "scored text"
        );

        Some(TextSubscores {
            sentiment,
            keyword,
            linguistic,
            emotional,
            score,
        })
    }

    /// Extracts descriptive details from the raw (unpreprocessed) text.
    ///
    /// Keyword detection here matches depression terms as substrings of
    /// words, unlike the exact-token matching used for scoring.
    pub fn details(&self, text: &str) -> TextDetails {
        let sentiment = self.nlp.sentiment(text);

        let key_phrases = self
            .nlp
            .noun_chunks(text)
            .into_iter()
            .map(|chunk| chunk.trim().to_string())
            .filter(|chunk| chunk.chars().count() > 2)
            .take(MAX_KEY_PHRASES)
            .collect();

        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        let mut matched_keywords: Vec<String> = Vec::new();
        for word in &words {
            if contains_any(word, &self.lexicon.depression)
                && !matched_keywords.iter().any(|seen| seen == word)
            {
                matched_keywords.push(word.to_string());
            }
        }

        TextDetails {
            sentiment_breakdown: SentimentBreakdown::from_polarity(sentiment.polarity),
            key_phrases,
            matched_keywords,
            word_count: words.len(),
            subjectivity: sentiment.subjectivity,
        }
    }
}
