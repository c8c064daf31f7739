use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task record error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A path whose extension belongs to neither the image nor the video group.
    #[error("Unknown media kind for {}", path.display())]
    UnknownKind { path: PathBuf },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<confique::Error> for TriageError {
    fn from(err: confique::Error) -> Self {
        TriageError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;
