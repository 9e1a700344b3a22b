use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    error::Result,
    idf::IdfTable,
    ranking::{self, sentence_score},
    sentence, tokenize,
};

/// Knobs for one query-processing run.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text user query.
    pub query: String,
    /// Number of files to keep from the first ranking stage.
    pub file_matches: usize,
    /// Number of sentences to return from the second stage.
    pub sentence_matches: usize,
}

/// The outcome of the two-stage pipeline for one query.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    /// Deduplicated, normalized query terms.
    pub query_terms: Vec<String>,
    /// Filenames kept by the first stage, best first.
    pub files: Vec<String>,
    /// Ranked sentences drawn from those files, best first.
    pub sentences: Vec<SentenceMatch>,
}

/// One ranked sentence with its ranking key.
#[derive(Debug, Serialize)]
pub struct SentenceMatch {
    pub text: String,
    pub idf_sum: f64,
    pub density: f64,
}

/// Execute the full retrieval pipeline over an in-memory corpus.
///
/// 1. Tokenize every file and compute corpus-level IDF values
/// 2. Rank files by summed TF-IDF, keep the top `file_matches`
/// 3. Split the kept files into sentences and tokenize them
/// 4. Recompute IDF values over the sentence collection
/// 5. Rank sentences by `(idf_sum, density)`, keep `sentence_matches`
///
/// Both IDF tables are request-scoped and never shared between stages.
pub fn execute_search(
    params: &SearchParams,
    corpus: &BTreeMap<String, String>,
) -> Result<SearchOutcome> {
    let query = tokenize::query_terms(&params.query);
    if query.is_empty() {
        tracing::warn!("query tokenized to nothing; ranking is unguided");
    }

    // Stage 1: corpus-level statistics and file ranking.
    let file_words: BTreeMap<String, Vec<String>> = corpus
        .iter()
        .map(|(name, text)| (name.clone(), tokenize::tokenize(text)))
        .collect();
    let file_idfs = IdfTable::compute(&file_words)?;
    tracing::debug!(
        files = file_words.len(),
        terms = file_idfs.len(),
        "computed corpus statistics"
    );

    let files = ranking::top_files(
        &query,
        &file_words,
        &file_idfs,
        params.file_matches,
    )?;
    tracing::debug!(?files, "first stage selected files");

    // Stage 2: sentence extraction from the kept files. Sentences that
    // tokenize to nothing never reach the ranker. Keyed by sentence text,
    // so a sentence repeated across files counts once.
    let mut sentence_words: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in &files {
        for text in sentence::split_sentences(&corpus[name]) {
            let tokens = tokenize::tokenize(&text);
            if !tokens.is_empty() {
                sentence_words.insert(text, tokens);
            }
        }
    }

    if sentence_words.is_empty() {
        tracing::debug!("kept files contain no rankable sentences");
        return Ok(SearchOutcome {
            query_terms: query.into_iter().collect(),
            files,
            sentences: Vec::new(),
        });
    }

    // Sentence-level statistics are recomputed from scratch; the file
    // table does not apply to this collection.
    let sentence_idfs = IdfTable::compute(&sentence_words)?;
    tracing::debug!(
        sentences = sentence_words.len(),
        terms = sentence_idfs.len(),
        "computed sentence statistics"
    );

    let ranked = ranking::top_sentences(
        &query,
        &sentence_words,
        &sentence_idfs,
        params.sentence_matches,
    )?;

    let sentences = ranked
        .into_iter()
        .map(|text| {
            let (idf_sum, density) =
                sentence_score(&query, &sentence_words[&text], &sentence_idfs)?;
            Ok(SentenceMatch {
                text,
                idf_sum,
                density,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SearchOutcome {
        query_terms: query.into_iter().collect(),
        files,
        sentences,
    })
}

/// Print the ranked sentences one per line, optionally preceded by the
/// matched filenames.
pub fn format_human(outcome: &SearchOutcome, show_files: bool) {
    if show_files {
        for name in &outcome.files {
            println!("{name}");
        }
    }
    for m in &outcome.sentences {
        println!("{}", m.text);
    }
}

/// Print the full outcome as a single JSON object.
pub fn format_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", serde_json::to_string(outcome)?);
    Ok(())
}
