//! English sentence boundary detection.
//!
//! Splits raw text into sentence strings. Each line of input is treated as
//! a separate passage, so headings and list items never merge into the
//! sentences around them. Within a passage, sentences end at `.`, `!` or
//! `?` followed by whitespace (or end of text), with a small abbreviation
//! list guarding against false breaks like "Dr. Smith".

/// Lowercased words that end with a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "sr", "jr", "etc", "vs", "fig",
    "inc", "ltd", "al", "ca", "approx",
];

/// Characters that may trail a terminator and still belong to the sentence.
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// Split a block of text into sentence strings.
///
/// Sentences are trimmed; empty lines and whitespace-only fragments are
/// dropped. Sentences that later tokenize to nothing must be filtered by
/// the caller before ranking.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.lines().flat_map(split_passage).collect()
}

fn split_passage(passage: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = passage.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        // Consume a run of terminators ("?!", "...") as one boundary.
        let mut j = i;
        while j + 1 < chars.len() && matches!(chars[j + 1].1, '.' | '!' | '?')
        {
            j += 1;
        }
        // Closing quotes and brackets stay attached to the sentence.
        let mut k = j;
        while k + 1 < chars.len() && is_closing(chars[k + 1].1) {
            k += 1;
        }

        let at_end = k + 1 >= chars.len();
        let followed_by_space = !at_end && chars[k + 1].1.is_whitespace();
        let abbreviation =
            c == '.' && j == i && ends_with_abbreviation(&passage[..offset]);

        if (at_end || followed_by_space) && !abbreviation {
            let end = if at_end { passage.len() } else { chars[k + 1].0 };
            let sentence = passage[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }
        i = k + 1;
    }

    let tail = passage[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Whether the text before a period ends in an abbreviation or a
/// single-letter initial ("J. Smith", "e.g.").
fn ends_with_abbreviation(prefix: &str) -> bool {
    let word: String = prefix
        .chars()
        .rev()
        .take_while(|c| c.is_alphabetic())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<String>()
        .to_lowercase();

    word.chars().count() == 1 || ABBREVIATIONS.contains(&word.as_str())
}
