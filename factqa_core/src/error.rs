use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Corpus contains no sentences")]
    EmptyCorpus,

    #[error("Malformed corpus file at line {line}: {reason}")]
    CorpusFormat { line: usize, reason: String },

    #[error("Ingest report has {failed} failures out of {total} sentences")]
    InvalidReport { total: usize, failed: usize },

    #[error("Parser error: {0}")]
    Parser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a question could not be scored against the fact store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question has no predicate")]
    Unparseable,

    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}
