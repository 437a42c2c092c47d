//! Heuristic noun-phrase chunking.
//!
//! A chunk is either a personal pronoun on its own or a determiner/possessive
//! followed by a run of content words. Function words and punctuation end a
//! run. Chunks keep the original casing.

use crate::tokens::tokenize;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "every", "each", "no", "another",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "everyone",
    "nobody", "somebody", "everything", "nothing", "something",
];

#[rustfmt::skip]
const FUNCTION_WORDS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "as", "than", "then", "when",
    "while", "though", "although", "of", "in", "on", "at", "to", "for", "with", "by", "from",
    "about", "into", "over", "under", "after", "before", "through", "without", "is", "am",
    "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has", "had",
    "will", "would", "can", "could", "should", "shall", "may", "might", "must", "not", "never",
    "very", "really", "just", "too", "also", "always", "feel", "feels", "felt", "get", "gets",
    "got", "go", "goes", "went", "make", "makes", "made", "seem", "seems", "keep", "keeps",
    "there", "here", "where", "what", "which", "who", "how", "why",
];

#[derive(Debug, Clone, Default)]
pub struct NounChunker;

impl NounChunker {
    pub fn chunks(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let word = lower[i].as_str();
            if PRONOUNS.contains(&word) {
                chunks.push(tokens[i].text.clone());
                i += 1;
                continue;
            }
            if DETERMINERS.contains(&word) {
                let mut end = i + 1;
                while end < tokens.len() && is_content(tokens[end].is_alpha, &lower[end]) {
                    end += 1;
                }
                if end > i + 1 {
                    let phrase: Vec<&str> = tokens[i..end].iter().map(|t| t.text.as_str()).collect();
                    chunks.push(phrase.join(" "));
                    i = end;
                    continue;
                }
            }
            i += 1;
        }
        chunks
    }
}

fn is_content(is_alpha: bool, lower: &str) -> bool {
    is_alpha
        && !FUNCTION_WORDS.contains(&lower)
        && !DETERMINERS.contains(&lower)
        && !PRONOUNS.contains(&lower)
}
