//! quaero - a two-stage TF-IDF question answering engine for local text
//! corpora.
//!
//! Given a directory of `.txt` files and a free-text query, quaero first
//! ranks whole files by summed TF-IDF, then ranks the sentences of the
//! winning file(s) by summed IDF with a query-term-density tiebreak, and
//! prints the best sentence(s).
//!
//! # Quick start
//!
//! ```no_run
//! use quaero::corpus;
//! use quaero::search::{self, SearchParams};
//!
//! let corpus = corpus::load_corpus(std::path::Path::new("corpus")).unwrap();
//!
//! let params = SearchParams {
//!     query: "when was the internet invented".to_string(),
//!     file_matches: 1,
//!     sentence_matches: 1,
//! };
//!
//! let outcome = search::execute_search(&params, &corpus).unwrap();
//! for m in &outcome.sentences {
//!     println!("{}", m.text);
//! }
//! ```

pub mod corpus;
pub mod error;
pub mod idf;
pub mod ranking;
pub mod search;
pub mod sentence;
pub mod tokenize;

pub use error::{Error, Result};
pub use idf::IdfTable;
