//! Word tokenizer with stop word removal.
//!
//! Tokenizes text by lowercasing, splitting on non-word characters, and
//! removing English stop words. Apostrophes are kept inside words so
//! contractions like "won't" survive as single tokens and can be matched
//! against the stop word list.

use std::{
    collections::{BTreeSet, HashSet},
    sync::LazyLock,
};

/// The standard English stop word list (NLTK's set).
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
        "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
        "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
        "hers", "herself", "it", "it's", "its", "itself", "they", "them",
        "their", "theirs", "themselves", "what", "which", "who", "whom",
        "this", "that", "that'll", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "a", "an", "the", "and",
        "but", "if", "or", "because", "as", "until", "while", "of", "at",
        "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to",
        "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when",
        "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own",
        "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "don't", "should", "should've", "now", "d", "ll",
        "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
        "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't",
        "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
        "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
        "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
    ]
    .into_iter()
    .collect()
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Tokenize a document: lowercase, split into words, drop punctuation-only
/// tokens and English stop words.
///
/// A single filtering pass produces a new sequence; the input is never
/// mutated. Duplicates are preserved in their original order, as required
/// for term-frequency counts.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in lowered.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            push_token(&lowered[s..i], &mut tokens);
            start = None;
        }
    }
    if let Some(s) = start {
        push_token(&lowered[s..], &mut tokens);
    }

    tokens
}

fn push_token(word: &str, tokens: &mut Vec<String>) {
    // Leading/trailing apostrophes are quote punctuation, not word content.
    let word = word.trim_matches('\'');
    if !word.is_empty() && !STOP_WORDS.contains(word) {
        tokens.push(word.to_string());
    }
}

/// Derive the deduplicated query term set from free-text user input.
///
/// A `BTreeSet` keeps query iteration (and therefore floating-point
/// summation order in the rankers) deterministic across runs.
pub fn query_terms(input: &str) -> BTreeSet<String> {
    tokenize(input).into_iter().collect()
}
