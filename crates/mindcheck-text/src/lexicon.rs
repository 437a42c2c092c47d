//! Word lists driving the keyword, linguistic and emotional subscores.
//!
//! The built-in English lists are returned by [`Lexicon::default`]. A TOML
//! document may override any subset of them:
//!
//! ```toml
//! positive = ["happy", "calm", "rested"]
//! negation = ["no", "not", "never"]
//! ```
//!
//! Lists missing from the document keep their built-in contents. Entries are
//! lowercased on load because every comparison happens on lowercased text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

const DEPRESSION: &[&str] = &[
    "sad", "depressed", "hopeless", "worthless", "empty", "lonely", "tired", "exhausted",
    "unmotivated", "anxious", "worried", "stressed", "overwhelmed", "isolated", "disconnected",
    "numb", "pain", "hurt", "suffering", "struggle", "difficult", "hard", "cannot", "unable",
    "impossible", "fail", "failure", "lost", "darkness", "heavy", "burden", "trapped", "stuck",
    "helpless",
];

const POSITIVE: &[&str] = &[
    "happy", "joy", "excited", "great", "amazing", "wonderful", "fantastic", "good", "excellent",
    "love", "enjoyable", "pleasant", "cheerful", "optimistic", "positive", "grateful", "blessed",
    "content", "satisfied",
];

const FIRST_PERSON: &[&str] = &["i", "me", "my", "myself"];

const NEGATION: &[&str] = &[
    "no", "not", "never", "nothing", "nobody", "nowhere", "neither", "nor",
];

const ABSOLUTE: &[&str] = &[
    "always", "never", "all", "nothing", "everything", "everyone", "nobody",
];

const SADNESS: &[&str] = &["sad", "depressed", "down", "blue", "melancholy", "sorrowful"];

const ANXIETY: &[&str] = &["anxious", "worried", "nervous", "scared", "afraid", "panic"];

const HOPELESSNESS: &[&str] = &["hopeless", "helpless", "worthless", "pointless", "useless"];

/// Errors that can occur while loading a lexicon override.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable word lists used by the text scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Depression indicators. Exact-token matched for scoring, substring
    /// matched for detail extraction.
    pub depression: BTreeSet<String>,
    /// Positive indicators, exact-token matched.
    pub positive: BTreeSet<String>,
    pub first_person: BTreeSet<String>,
    pub negation: BTreeSet<String>,
    /// Black-and-white thinking markers.
    pub absolute: BTreeSet<String>,
    /// Emotional categories, substring matched.
    pub sadness: BTreeSet<String>,
    pub anxiety: BTreeSet<String>,
    /// Weighted twice in the emotional subscore.
    pub hopelessness: BTreeSet<String>,
}

fn to_set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            depression: to_set(DEPRESSION),
            positive: to_set(POSITIVE),
            first_person: to_set(FIRST_PERSON),
            negation: to_set(NEGATION),
            absolute: to_set(ABSOLUTE),
            sadness: to_set(SADNESS),
            anxiety: to_set(ANXIETY),
            hopelessness: to_set(HOPELESSNESS),
        }
    }
}

impl Lexicon {
    /// Parses a TOML override on top of the built-in lists.
    pub fn from_toml_str(contents: &str) -> Result<Self, LexiconError> {
        let parsed: Lexicon = toml::from_str(contents)?;
        Ok(parsed.lowercased())
    }

    /// Reads and parses a TOML override file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let lexicon = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.as_ref().display(),
            depression = lexicon.depression.len(),
            positive = lexicon.positive.len(),
            "loaded lexicon override"
        );
        Ok(lexicon)
    }

    fn lowercased(self) -> Self {
        let lower = |set: BTreeSet<String>| -> BTreeSet<String> {
            set.into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            depression: lower(self.depression),
            positive: lower(self.positive),
            first_person: lower(self.first_person),
            negation: lower(self.negation),
            absolute: lower(self.absolute),
            sadness: lower(self.sadness),
            anxiety: lower(self.anxiety),
            hopelessness: lower(self.hopelessness),
        }
    }
}
