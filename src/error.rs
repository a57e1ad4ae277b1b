//! Error handling for the resume matcher core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern compilation error: {0}")]
    PatternCompilation(String),

    #[error("Embedding model error: {0}")]
    EmbeddingModel(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

impl From<regex::Error> for MatcherError {
    fn from(err: regex::Error) -> Self {
        MatcherError::PatternCompilation(err.to_string())
    }
}
