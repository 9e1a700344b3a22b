//! The two ranking stages: whole-file TF-IDF and sentence IDF + density.
//!
//! Both rankers share [`rank_by`], which scores every document, sorts by
//! the ranking key descending and returns the first `n` names. They differ
//! deliberately in what the key measures: the file ranker multiplies term
//! frequency into the IDF sum, while the sentence ranker counts each
//! matched query term's IDF once (presence only) and lets the density
//! tiebreak absorb frequency information.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
};

use rayon::prelude::*;

use crate::{error::Result, idf::IdfTable};

/// Sum of `tf(t) * idf(t)` over the query terms occurring in `tokens`.
///
/// Terms outside the query are ignored entirely; their counts are never
/// materialized, so query terms absent from the whole collection (and
/// therefore from `idfs`) contribute nothing and cause no lookup.
pub fn file_score(
    query: &BTreeSet<String>,
    tokens: &[String],
    idfs: &IdfTable,
) -> Result<f64> {
    let mut tf: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens {
        if query.contains(token) {
            *tf.entry(token).or_default() += 1;
        }
    }

    let mut sum = 0.0;
    for (term, count) in tf {
        sum += count as f64 * idfs.require(term)?;
    }
    Ok(sum)
}

/// `(idf_sum, density)` ranking key for one sentence.
///
/// `idf_sum` adds each matched query term's IDF once, regardless of how
/// often it occurs. `density` is the fraction of the sentence's tokens
/// that are query terms, with repetition.
pub fn sentence_score(
    query: &BTreeSet<String>,
    tokens: &[String],
    idfs: &IdfTable,
) -> Result<(f64, f64)> {
    // Zero-token sentences are filtered out before ranking.
    if tokens.is_empty() {
        return Ok((0.0, 0.0));
    }

    let mut idf_sum = 0.0;
    let mut matched = 0usize;
    for term in query {
        let count = tokens.iter().filter(|t| *t == term).count();
        if count > 0 {
            idf_sum += idfs.require(term)?;
            matched += count;
        }
    }

    Ok((idf_sum, matched as f64 / tokens.len() as f64))
}

/// Rank files by summed TF-IDF, best first.
///
/// Returns the first `min(n, files.len())` filenames. Score ties break by
/// filename ascending so repeated runs produce identical output.
pub fn top_files(
    query: &BTreeSet<String>,
    files: &BTreeMap<String, Vec<String>>,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>> {
    rank_by(files, n, |tokens| file_score(query, tokens, idfs))
}

/// Rank sentences by `(idf_sum, density)`, best first.
///
/// Returns the first `min(n, sentences.len())` sentence texts. Full-key
/// ties break by sentence text ascending.
pub fn top_sentences(
    query: &BTreeSet<String>,
    sentences: &BTreeMap<String, Vec<String>>,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>> {
    rank_by(sentences, n, |tokens| sentence_score(query, tokens, idfs))
}

/// Score every document in parallel, sort by key descending (name
/// ascending on ties) and keep the first `n` names.
fn rank_by<K, F>(
    documents: &BTreeMap<String, Vec<String>>,
    n: usize,
    score: F,
) -> Result<Vec<String>>
where
    K: PartialOrd + Send,
    F: Fn(&[String]) -> Result<K> + Sync + Send,
{
    let mut scored: Vec<(&String, K)> = documents
        .par_iter()
        .map(|(name, tokens)| score(tokens.as_slice()).map(|key| (name, key)))
        .collect::<Result<Vec<_>>>()?;

    // Keys are finite (log ratios and densities), so partial_cmp never
    // actually falls back here.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    Ok(scored
        .into_iter()
        .take(n)
        .map(|(name, _)| name.clone())
        .collect())
}
