//! Tokenisation shared by the sentiment analysers and the chunker.

use mindcheck_types::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]").expect("invalid regex"));

// Letters and apostrophes, so contractions like "don't" stay whole.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}']+").expect("invalid regex"));

/// Splits text into word runs and single punctuation marks.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN
        .find_iter(text)
        .map(|m| Token::new(m.as_str()))
        .collect()
}

/// Lowercased words for lexicon lookup, apostrophes trimmed from the edges.
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().trim_matches('\'').to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "nowhere", "cannot",
    "without",
];

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_words_and_punctuation() {
        let tokens = tokenize("I'm tired, really.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["I", "'", "m", "tired", ",", "really", "."]);
        assert!(tokens[0].is_alpha);
        assert!(!tokens[4].is_alpha);
    }

    #[test]
    fn digits_are_not_alpha() {
        let tokens = tokenize("day 42");
        assert!(tokens[0].is_alpha);
        assert!(!tokens[1].is_alpha);
    }

    #[test]
    fn words_keep_contractions() {
        assert_eq!(words("I DON'T feel 'ok' today!"), ["i", "don't", "feel", "ok", "today"]);
    }

    #[test]
    fn negation_covers_contractions() {
        assert!(is_negation("never"));
        assert!(is_negation("don't"));
        assert!(is_negation("isn't"));
        assert!(!is_negation("note"));
    }
}
