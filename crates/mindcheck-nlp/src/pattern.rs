//! Averaged adjective polarity and subjectivity.
//!
//! Each lexicon hit contributes a `(polarity, subjectivity)` pair. An
//! intensifier directly before the word scales both by 1.3, and a negation
//! within the two preceding words multiplies polarity by -0.5. The result is
//! the mean over all hits, or zero for text without any.

use crate::tokens::{is_negation, words};
use std::collections::HashMap;

const INTENSIFY: f64 = 1.3;
const NEGATE: f64 = -0.5;
const NEGATION_WINDOW: usize = 2;

#[rustfmt::skip]
const ENTRIES: &[(&str, f64, f64)] = &[
    ("afraid", -0.6, 0.9), ("alone", -0.2, 0.5), ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0), ("anxious", -0.3, 0.8), ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67), ("beautiful", 0.85, 1.0), ("best", 1.0, 0.3),
    ("better", 0.5, 0.5), ("blessed", 0.5, 0.6), ("broken", -0.4, 0.5),
    ("calm", 0.3, 0.75), ("cheerful", 0.7, 0.8), ("content", 0.3, 0.6),
    ("dark", -0.15, 0.4), ("depressed", -0.6, 0.9), ("difficult", -0.5, 1.0),
    ("empty", -0.1, 0.5), ("enjoyable", 0.5, 0.6), ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.75), ("exhausted", -0.4, 0.6), ("fantastic", 0.4, 0.9),
    ("fine", 0.4, 0.5), ("fun", 0.3, 0.2), ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6), ("grateful", 0.6, 0.8), ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0), ("hard", -0.3, 0.5), ("heavy", -0.2, 0.5),
    ("helpless", -0.6, 0.8), ("hopeful", 0.5, 0.8), ("hopeless", -0.6, 0.8),
    ("horrible", -1.0, 1.0), ("hurt", -0.5, 0.7), ("impossible", -0.67, 1.0),
    ("isolated", -0.3, 0.5), ("joyful", 0.8, 0.9), ("lonely", -0.5, 0.7),
    ("love", 0.5, 0.6), ("lovely", 0.5, 0.75), ("miserable", -1.0, 1.0),
    ("nervous", -0.3, 0.7), ("nice", 0.6, 1.0), ("numb", -0.3, 0.6),
    ("okay", 0.5, 0.5), ("optimistic", 0.5, 0.7), ("overwhelmed", -0.3, 0.6),
    ("painful", -0.7, 0.9), ("peaceful", 0.4, 0.7), ("pleasant", 0.7, 1.0),
    ("pointless", -0.5, 0.6), ("positive", 0.2, 0.5), ("proud", 0.8, 1.0),
    ("sad", -0.5, 1.0), ("satisfied", 0.5, 1.0), ("scared", -0.5, 0.8),
    ("stressed", -0.4, 0.7), ("stuck", -0.3, 0.5), ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7), ("unhappy", -0.6, 0.9), ("useless", -0.5, 0.2),
    ("wonderful", 1.0, 1.0), ("worried", -0.4, 0.8), ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0), ("worthless", -0.8, 0.9),
];

pub(crate) const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "too", "totally", "incredibly", "absolutely",
    "completely", "deeply", "truly", "utterly", "quite",
];

#[derive(Debug, Clone)]
pub struct PatternSentiment {
    lexicon: HashMap<&'static str, (f64, f64)>,
}

impl Default for PatternSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSentiment {
    pub fn new() -> Self {
        let lexicon = ENTRIES
            .iter()
            .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
            .collect();
        Self { lexicon }
    }

    /// Returns `(polarity, subjectivity)` in `[-1, 1] x [0, 1]`.
    pub fn analyze(&self, text: &str) -> (f64, f64) {
        let words = words(text);
        let mut hits: Vec<(f64, f64)> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = self.lexicon.get(word.as_str()) else {
                continue;
            };
            if i > 0 && INTENSIFIERS.contains(&words[i - 1].as_str()) {
                polarity = (polarity * INTENSIFY).clamp(-1.0, 1.0);
                subjectivity = (subjectivity * INTENSIFY).min(1.0);
            }
            let window = &words[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|w| is_negation(w)) {
                polarity *= NEGATE;
            }
            hits.push((polarity, subjectivity));
        }

        if hits.is_empty() {
            return (0.0, 0.0);
        }
        let n = hits.len() as f64;
        let polarity = hits.iter().map(|h| h.0).sum::<f64>() / n;
        let subjectivity = hits.iter().map(|h| h.1).sum::<f64>() / n;
        (polarity, subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_words_are_neutral() {
        assert_eq!(PatternSentiment::new().analyze("the train left at noon"), (0.0, 0.0));
    }

    #[test]
    fn averages_hits() {
        let (polarity, subjectivity) = PatternSentiment::new().analyze("happy but tired");
        assert!((polarity - 0.2).abs() < 1e-12);
        assert!((subjectivity - 0.85).abs() < 1e-12);
    }

    #[test]
    fn intensifier_scales_and_clamps() {
        let pattern = PatternSentiment::new();
        let (polarity, subjectivity) = pattern.analyze("very good");
        assert!((polarity - 0.91).abs() < 1e-12);
        assert!((subjectivity - 0.78).abs() < 1e-12);
        assert_eq!(pattern.analyze("extremely happy").1, 1.0);
        assert_eq!(pattern.analyze("truly wonderful").0, 1.0);
    }

    #[test]
    fn negation_flips_and_halves() {
        let (polarity, _) = PatternSentiment::new().analyze("I am not happy");
        assert!((polarity + 0.4).abs() < 1e-12);
        let (polarity, _) = PatternSentiment::new().analyze("I don't feel good");
        assert!((polarity + 0.35).abs() < 1e-12);
    }

    #[test]
    fn negation_window_is_two_words() {
        let (polarity, _) = PatternSentiment::new().analyze("not that I am happy");
        assert_eq!(polarity, 0.8);
    }
}
