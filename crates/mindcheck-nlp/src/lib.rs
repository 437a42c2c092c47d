//! Lexicon-based [`NlpProvider`] for mindcheck.
//!
//! [`LexiconNlp`] supplies the language primitives the text scorer consumes:
//!
//! - polarity and subjectivity from averaged adjective scores ([`pattern`])
//! - an independent compound polarity from summed word valences ([`valence`])
//! - word/punctuation tokenisation ([`tokens`])
//! - determiner- and pronoun-anchored noun chunks ([`chunker`])
//!
//! Building the lexicons is done once per process through
//! [`LexiconNlp::shared`]; every later call returns the same instance.

pub mod chunker;
pub mod pattern;
pub mod tokens;
pub mod valence;

pub use chunker::NounChunker;
pub use pattern::PatternSentiment;
pub use valence::ValenceSentiment;

use mindcheck_text::NlpProvider;
use mindcheck_types::{SentimentResult, Token};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static SHARED: OnceCell<Arc<LexiconNlp>> = OnceCell::new();

#[derive(Debug, Clone, Default)]
pub struct LexiconNlp {
    pattern: PatternSentiment,
    valence: ValenceSentiment,
    chunker: NounChunker,
}

impl LexiconNlp {
    pub fn new() -> Self {
        Self {
            pattern: PatternSentiment::new(),
            valence: ValenceSentiment::new(),
            chunker: NounChunker,
        }
    }

    /// Returns the process-wide provider, building it on first use.
    pub fn shared() -> Arc<Self> {
        let nlp = SHARED.get_or_init(|| {
            tracing::info!("initialising lexicon NLP provider");
            Arc::new(Self::new())
        });
        Arc::clone(nlp)
    }
}

impl NlpProvider for LexiconNlp {
    fn sentiment(&self, text: &str) -> SentimentResult {
        let (polarity, subjectivity) = self.pattern.analyze(text);
        SentimentResult {
            polarity,
            subjectivity,
            compound: self.valence.compound(text),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokens::tokenize(text)
    }

    fn noun_chunks(&self, text: &str) -> Vec<String> {
        self.chunker.chunks(text)
    }
}
