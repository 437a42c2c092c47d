//! The four text subscores and their weighted combination.
//!
//! Each function is pure over already-computed inputs so the scoring rules
//! can be exercised without an NLP provider.

use crate::lexicon::Lexicon;
use mindcheck_types::{clamp_score, RiskScore, SentimentResult, Token, NEUTRAL_SCORE};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Texts with fewer trimmed characters than this score neutral.
pub const MIN_TEXT_CHARS: usize = 10;

pub const SENTIMENT_WEIGHT: f64 = 0.5;
pub const KEYWORD_WEIGHT: f64 = 0.3;
pub const LINGUISTIC_WEIGHT: f64 = 0.15;
pub const EMOTIONAL_WEIGHT: f64 = 0.05;

/// A sentiment subscore below this caps the final score at the same value.
pub const POSITIVE_CAP: f64 = 3.0;

/// First-person pronoun ratio above which self-focus is penalised.
const FIRST_PERSON_THRESHOLD: f64 = 0.3;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("invalid regex"));

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?;:]").expect("invalid regex"));

/// Returns true when `text` is too short to analyse.
pub fn is_insufficient(text: &str) -> bool {
    text.trim().chars().count() < MIN_TEXT_CHARS
}

/// Lowercases, collapses whitespace runs to one space, and strips every
/// character outside word characters, whitespace and `.,!?;:`.
pub fn preprocess(text: &str) -> String {
    let lower = text.to_lowercase();
    let collapsed = WHITESPACE_RE.replace_all(&lower, " ");
    let stripped = DISALLOWED_RE.replace_all(&collapsed, "");
    stripped.trim().to_string()
}

/// Maps the mean of the two polarity signals onto `[0, 10]`.
///
/// `+1` maps to 0, `0` to 5 and `-1` to 10.
pub fn sentiment_subscore(sentiment: &SentimentResult) -> f64 {
    let avg = (sentiment.polarity + sentiment.compound) / 2.0;
    5.0 - avg * 5.0
}

/// Exact whole-word matches against the depression and positive sets.
pub fn keyword_subscore(words: &[&str], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return NEUTRAL_SCORE;
    }

    let depression = words
        .iter()
        .filter(|w| lexicon.depression.contains(**w))
        .count();
    let positive = words
        .iter()
        .filter(|w| lexicon.positive.contains(**w))
        .count();

    let total = words.len() as f64;
    let depression_ratio = depression as f64 / total;
    let positive_ratio = positive as f64 / total;

    clamp_score(5.0 - positive_ratio * 20.0 + depression_ratio * 30.0)
}

/// Pronoun, negation and absolutist ratios over alphabetic tokens.
///
/// Only the upper bound is clamped here; the final combination clamps the
/// lower end.
pub fn linguistic_subscore(tokens: &[Token], lexicon: &Lexicon) -> f64 {
    let alpha = tokens.iter().filter(|t| t.is_alpha).count();
    if alpha == 0 {
        return NEUTRAL_SCORE;
    }

    let count_in = |set: &BTreeSet<String>| {
        tokens
            .iter()
            .filter(|t| set.contains(t.text.to_lowercase().as_str()))
            .count() as f64
    };

    let total = alpha as f64;
    let first_person_ratio = count_in(&lexicon.first_person) / total;
    let negation_ratio = count_in(&lexicon.negation) / total;
    let absolute_ratio = count_in(&lexicon.absolute) / total;

    let mut score = 5.0;
    if first_person_ratio > FIRST_PERSON_THRESHOLD {
        score += (first_person_ratio - FIRST_PERSON_THRESHOLD) * 10.0;
    }
    score += negation_ratio * 15.0;
    score += absolute_ratio * 20.0;

    score.min(10.0)
}

/// Substring matches across the sadness, anxiety and hopelessness
/// categories, hopelessness counted twice.
pub fn emotional_subscore(words: &[&str], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return NEUTRAL_SCORE;
    }

    let hits = |set: &BTreeSet<String>| {
        words
            .iter()
            .filter(|w| contains_any(w, set))
            .count()
    };

    let weighted = hits(&lexicon.sadness) + hits(&lexicon.anxiety) + hits(&lexicon.hopelessness) * 2;
    let ratio = weighted as f64 / words.len() as f64;

    (5.0 + ratio * 30.0).min(10.0)
}

/// Weighted sum of the subscores with the positive-sentiment cap.
pub fn combine_subscores(sentiment: f64, keyword: f64, linguistic: f64, emotional: f64) -> RiskScore {
    let mut score = sentiment * SENTIMENT_WEIGHT
        + keyword * KEYWORD_WEIGHT
        + linguistic * LINGUISTIC_WEIGHT
        + emotional * EMOTIONAL_WEIGHT;

    if sentiment < POSITIVE_CAP {
        score = score.min(POSITIVE_CAP);
    }

    RiskScore::new(score)
}

/// True when any term of `set` occurs inside `word`.
pub(crate) fn contains_any(word: &str, set: &BTreeSet<String>) -> bool {
    set.iter().any(|term| word.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn preprocess_normalizes_case_whitespace_and_symbols() {
        assert_eq!(
            preprocess("  I   feel\tSO\n\ntired… #sad :( !! "),
            "i feel so tired sad : !!"
        );
    }

    #[test]
    fn preprocess_keeps_sentence_punctuation() {
        assert_eq!(preprocess("Why? Because; I said: no."), "why? because; i said: no.");
    }

    #[test]
    fn insufficient_counts_trimmed_chars() {
        assert!(is_insufficient("   short   "));
        assert!(is_insufficient("123456789"));
        assert!(!is_insufficient("1234567890"));
    }

    #[test]
    fn sentiment_subscore_direction() {
        let positive = SentimentResult {
            polarity: 1.0,
            subjectivity: 0.0,
            compound: 1.0,
        };
        let negative = SentimentResult {
            polarity: -1.0,
            subjectivity: 0.0,
            compound: -1.0,
        };
        assert_eq!(sentiment_subscore(&positive), 0.0);
        assert_eq!(sentiment_subscore(&SentimentResult::default()), 5.0);
        assert_eq!(sentiment_subscore(&negative), 10.0);
    }

    #[test]
    fn sentiment_subscore_averages_both_signals() {
        let mixed = SentimentResult {
            polarity: 0.4,
            subjectivity: 0.3,
            compound: -0.8,
        };
        assert!((sentiment_subscore(&mixed) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn keyword_subscore_empty_is_neutral() {
        assert_eq!(keyword_subscore(&[], &Lexicon::default()), 5.0);
    }

    #[test]
    fn keyword_subscore_exact_match_only() {
        let lexicon = Lexicon::default();
        // "sadness" and "sad," are not exact tokens of the depression set.
        assert_eq!(
            keyword_subscore(&words("sadness sad, is around here"), &lexicon),
            5.0
        );
        // one hit in five words: 5 + 0.2 * 30, clamped
        assert_eq!(keyword_subscore(&words("sad is around here today"), &lexicon), 10.0);
    }

    #[test]
    fn keyword_subscore_formula() {
        let lexicon = Lexicon::default();
        // 1 depression hit, 1 positive hit, 10 words: 5 - 2 + 3
        let text = words("i am tired but also happy with a quiet day");
        assert_eq!(text.len(), 10);
        assert!((keyword_subscore(&text, &lexicon) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn keyword_subscore_monotone_in_depression_hits() {
        let lexicon = Lexicon::default();
        let sentences = [
            "today was a quiet calm slow day at the office",
            "today was a tired calm slow day at the office",
            "today was a tired numb slow day at the office",
            "today was a tired numb lost day at the office",
        ];
        let scores: Vec<f64> = sentences
            .iter()
            .map(|s| {
                let w = words(s);
                assert_eq!(w.len(), 10);
                keyword_subscore(&w, &lexicon)
            })
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[1] >= pair[0], "scores not monotone: {:?}", scores);
        }
        assert!(scores[3] > scores[0]);
    }

    #[test]
    fn keyword_subscore_antitone_in_positive_hits() {
        let lexicon = Lexicon::default();
        let sentences = [
            "today was a quiet calm slow day at the office",
            "today was a good calm slow day at the office",
            "today was a good happy slow day at the office",
            "today was a good happy great day at the office",
        ];
        let scores: Vec<f64> = sentences
            .iter()
            .map(|s| {
                let w = words(s);
                assert_eq!(w.len(), 10);
                keyword_subscore(&w, &lexicon)
            })
            .collect();
        for pair in scores.windows(2) {
            assert!(pair[1] <= pair[0], "scores not antitone: {:?}", scores);
        }
        assert!(scores[3] < scores[0]);
    }

    #[test]
    fn linguistic_subscore_no_alpha_tokens_is_neutral() {
        let tokens = vec![Token::new("42"), Token::new("!")];
        assert_eq!(linguistic_subscore(&tokens, &Lexicon::default()), 5.0);
        assert_eq!(linguistic_subscore(&[], &Lexicon::default()), 5.0);
    }

    #[test]
    fn linguistic_subscore_ignores_moderate_self_focus() {
        // 1 of 4 alphabetic tokens is first person (0.25 <= 0.3)
        let tokens: Vec<Token> = ["I", "went", "outside", "today"]
            .into_iter()
            .map(Token::new)
            .collect();
        assert_eq!(linguistic_subscore(&tokens, &Lexicon::default()), 5.0);
    }

    #[test]
    fn linguistic_subscore_penalises_negation_and_absolutes() {
        // "never" is both a negation and an absolute: 5 + 3.75 + 5, clamped
        let tokens: Vec<Token> = ["it", "never", "gets", "better"]
            .into_iter()
            .map(Token::new)
            .collect();
        assert_eq!(linguistic_subscore(&tokens, &Lexicon::default()), 10.0);

        // 1 negation in 10 tokens: 5 + 1.5
        let tokens: Vec<Token> = "we did not go to the park this sunny afternoon"
            .split_whitespace()
            .map(Token::new)
            .collect();
        assert!((linguistic_subscore(&tokens, &Lexicon::default()) - 6.5).abs() < 1e-12);
    }

    #[test]
    fn linguistic_subscore_excess_self_focus() {
        // 2 of 5 first person: 0.4 -> 5 + 0.1*10
        let tokens: Vec<Token> = ["me", "and", "myself", "went", "home"]
            .into_iter()
            .map(Token::new)
            .collect();
        assert!((linguistic_subscore(&tokens, &Lexicon::default()) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn linguistic_subscore_counts_punctuation_tokens_but_not_in_denominator() {
        // "." is not alphabetic: 1 negation over 4 alpha tokens
        let tokens: Vec<Token> = ["no", "one", "came", "over", "."]
            .into_iter()
            .map(Token::new)
            .collect();
        assert!((linguistic_subscore(&tokens, &Lexicon::default()) - 8.75).abs() < 1e-12);
    }

    #[test]
    fn emotional_subscore_uses_substrings() {
        let lexicon = Lexicon::default();
        // "sadness" contains "sad"; 1 hit over 10 words: 5 + 0.1*30
        let text = words("there is a sadness in the air this grey morning");
        assert_eq!(text.len(), 10);
        assert!((emotional_subscore(&text, &lexicon) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn emotional_subscore_weights_hopelessness_twice() {
        let lexicon = Lexicon::default();
        let base = words("one two three four five six seven eight nine ten");
        let hopeless = words("one two three four five six seven eight nine useless");
        let nervous = words("one two three four five six seven eight nine nervous");
        assert_eq!(emotional_subscore(&base, &lexicon), 5.0);
        assert!((emotional_subscore(&nervous, &lexicon) - 8.0).abs() < 1e-12);
        assert_eq!(emotional_subscore(&hopeless, &lexicon), 10.0);
    }

    #[test]
    fn emotional_subscore_empty_is_neutral() {
        assert_eq!(emotional_subscore(&[], &Lexicon::default()), 5.0);
    }

    #[test]
    fn combine_uses_fixed_weights() {
        let score = combine_subscores(6.0, 8.0, 4.0, 10.0);
        // 3.0 + 2.4 + 0.6 + 0.5
        assert!((score.value() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn combine_caps_strongly_positive_sentiment() {
        let score = combine_subscores(2.0, 10.0, 10.0, 10.0);
        assert_eq!(score.value(), POSITIVE_CAP);

        let uncapped = combine_subscores(3.0, 10.0, 10.0, 10.0);
        assert!((uncapped.value() - 6.5).abs() < 1e-12);
    }

    #[test]
    fn combine_clamps_negative_linguistic_contribution() {
        let score = combine_subscores(0.0, 0.0, -40.0, 0.0);
        assert_eq!(score.value(), 0.0);
    }
}
