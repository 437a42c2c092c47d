//! Summed word valence normalised into a compound score.
//!
//! Word valences sit on a `[-4, 4]` scale. Boosters and dampeners directly
//! before a word shift its magnitude, a negation in the three preceding
//! words multiplies it by -0.74, and exclamation marks (up to four) push the
//! sum further from zero. The sum `x` is normalised as `x / sqrt(x² + 15)`.

use crate::pattern::INTENSIFIERS;
use crate::tokens::{is_negation, words};
use std::collections::HashMap;

const NORMALIZE_ALPHA: f64 = 15.0;
const BOOST: f64 = 0.293;
const NEGATE: f64 = -0.74;
const NEGATION_WINDOW: usize = 3;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "kinda", "little", "partly"];

#[rustfmt::skip]
const ENTRIES: &[(&str, f64)] = &[
    ("afraid", -2.2), ("alone", -1.0), ("amazing", 2.8), ("angry", -2.3),
    ("anxious", -1.0), ("awful", -2.0), ("bad", -2.5), ("beautiful", 2.9),
    ("best", 3.2), ("better", 1.9), ("blessed", 2.9), ("broken", -1.6),
    ("burden", -1.9), ("calm", 1.3), ("cheerful", 2.5), ("cry", -2.1),
    ("crying", -2.1), ("dark", -1.4), ("dead", -3.3), ("depressed", -2.3),
    ("die", -2.9), ("difficult", -1.5), ("empty", -0.8), ("enjoy", 2.2),
    ("enjoyable", 1.9), ("excellent", 2.7), ("excited", 2.2), ("exhausted", -1.5),
    ("fail", -2.5), ("failure", -2.3), ("fantastic", 2.6), ("fine", 0.8),
    ("fun", 2.3), ("glad", 2.0), ("good", 1.9), ("grateful", 2.0),
    ("great", 3.1), ("happy", 2.7), ("hard", -0.4), ("hate", -2.7),
    ("helpless", -2.0), ("hope", 1.9), ("hopeful", 1.9), ("hopeless", -2.0),
    ("horrible", -2.5), ("hurt", -2.4), ("impossible", -1.4), ("isolated", -1.3),
    ("joy", 2.8), ("joyful", 2.9), ("laugh", 2.6), ("lonely", -1.5),
    ("lost", -1.3), ("love", 3.2), ("lovely", 2.8), ("miserable", -2.2),
    ("nervous", -1.1), ("nice", 1.8), ("numb", -1.1), ("ok", 1.2),
    ("okay", 0.9), ("optimistic", 1.3), ("overwhelmed", -1.5), ("pain", -2.3),
    ("painful", -1.9), ("panic", -2.3), ("peaceful", 2.2), ("pleasant", 2.3),
    ("pointless", -1.3), ("positive", 2.6), ("proud", 2.1), ("sad", -2.1),
    ("satisfied", 1.8), ("scared", -2.2), ("smile", 1.5), ("stressed", -1.4),
    ("struggle", -1.3), ("stuck", -1.0), ("suffering", -2.1), ("terrible", -2.1),
    ("thanks", 1.9), ("tired", -1.9), ("trapped", -2.4), ("unhappy", -1.8),
    ("useless", -1.8), ("wonderful", 2.7), ("worried", -1.2), ("worse", -2.1),
    ("worst", -3.1), ("worthless", -1.9),
];

#[derive(Debug, Clone)]
pub struct ValenceSentiment {
    lexicon: HashMap<&'static str, f64>,
}

impl Default for ValenceSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceSentiment {
    pub fn new() -> Self {
        Self {
            lexicon: ENTRIES.iter().copied().collect(),
        }
    }

    /// Returns the compound score in `[-1, 1]`.
    pub fn compound(&self, text: &str) -> f64 {
        let words = words(text);
        let mut sum = 0.0;

        for (i, word) in words.iter().enumerate() {
            let Some(&base) = self.lexicon.get(word.as_str()) else {
                continue;
            };
            let mut valence = base;
            if i > 0 {
                let previous = words[i - 1].as_str();
                if INTENSIFIERS.contains(&previous) {
                    valence += BOOST * valence.signum();
                } else if DAMPENERS.contains(&previous) {
                    valence -= BOOST * valence.signum();
                }
            }
            let window = &words[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|w| is_negation(w)) {
                valence *= NEGATE;
            }
            sum += valence;
        }

        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += bangs * EXCLAMATION_BOOST * sum.signum();
        }

        normalize(sum)
    }
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
