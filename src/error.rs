pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus error: {0}")]
    Corpus(String),

    #[error("cannot compute IDF values over an empty document collection")]
    EmptyCollection,

    #[error("term {term:?} has no entry in the IDF table for this collection")]
    MissingIdf { term: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
