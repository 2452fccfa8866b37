//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use glimpsy_core::QuizError;
use glimpsy_core::model::QuestionSetError;

/// Errors emitted while loading a question dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("failed to read question file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question file is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionSetError),
}

/// Errors emitted by a `ShareSink`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShareError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

/// Errors emitted by `GameService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
