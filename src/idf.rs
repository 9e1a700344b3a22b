//! Inverse document frequency statistics over a fixed document collection.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Error, Result};

/// IDF scores for one specific document collection.
///
/// A table is computed from a fixed collection snapshot and contains an
/// entry for exactly the terms that appear in at least one document of
/// that collection. Tables for different collections (files vs. the
/// sentences of a top file) are never interchangeable.
#[derive(Debug, Clone)]
pub struct IdfTable {
    scores: HashMap<String, f64>,
}

impl IdfTable {
    /// Compute IDF values for every term across `documents`.
    ///
    /// A term's document count considers set membership only; repeats
    /// within one document count once. `IDF(t) = ln(total / doc_count(t))`,
    /// so scores are always `>= 0`, with 0 exactly when a term appears in
    /// every document.
    ///
    /// Fails with [`Error::EmptyCollection`] when `documents` is empty.
    pub fn compute(documents: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let total = documents.len() as f64;
        let mut doc_counts: HashMap<&str, usize> = HashMap::new();
        for tokens in documents.values() {
            let distinct: HashSet<&str> =
                tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *doc_counts.entry(term).or_default() += 1;
            }
        }

        let scores = doc_counts
            .into_iter()
            .map(|(term, count)| {
                (term.to_string(), (total / count as f64).ln())
            })
            .collect();

        Ok(Self { scores })
    }

    /// Look up a term's IDF score, if the term occurs in the collection.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.scores.get(term).copied()
    }

    /// Look up a term that the table is expected to cover.
    ///
    /// A miss means mismatched collections were passed to different
    /// pipeline stages; it is surfaced as [`Error::MissingIdf`] rather
    /// than a panic.
    pub fn require(&self, term: &str) -> Result<f64> {
        self.get(term).ok_or_else(|| Error::MissingIdf {
            term: term.to_string(),
        })
    }

    /// Number of distinct terms in the collection.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
