//! Text risk scoring for mindcheck.
//!
//! [`TextRiskScorer`] turns free-form text into a risk score in `[0, 10]`
//! from four weighted subscores:
//!
//! | subscore | weight | signal |
//! |---|---|---|
//! | sentiment | 0.50 | mean of two independent polarity signals |
//! | keyword | 0.30 | exact-word depression and positive indicators |
//! | linguistic | 0.15 | first-person, negation and absolutist ratios |
//! | emotional | 0.05 | substring hits for sadness, anxiety, hopelessness |
//!
//! A strongly positive sentiment subscore (below 3.0) caps the final score
//! at 3.0. Higher scores denote greater concern.
//!
//! The NLP primitives (polarity, subjectivity, tokenisation, noun-phrase
//! chunking) are consumed through the [`NlpProvider`] trait; this crate does
//! not implement them. Word lists come from a [`Lexicon`], built in or loaded
//! from TOML once at startup.

pub mod lexicon;
pub mod nlp;
pub mod scorer;
pub mod subscores;

pub use lexicon::{Lexicon, LexiconError};
pub use nlp::{NlpProvider, StaticNlp};
pub use scorer::{TextRiskScorer, MAX_KEY_PHRASES};
pub use subscores::{preprocess, MIN_TEXT_CHARS};
