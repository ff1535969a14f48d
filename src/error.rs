//! Error types.
//!
//! `QuizError` covers precondition violations inside the quiz core.
//! `Error` is the crate-level type for everything that touches the outside
//! world (bank files, config files, the terminal).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A rejected quiz construction or transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyQuestionBank,

    #[error("question {id} is invalid: {reason}")]
    InvalidQuestion { id: u32, reason: String },

    #[error("question {} has not been answered yet", .index + 1)]
    NotAnswered { index: usize },

    #[error("quiz is already completed; restart to play again")]
    AlreadyCompleted,
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid question bank {}: {source}", path.display())]
    ParseBank {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
