// crates/locsuggest-core/src/error.rs

use thiserror::Error;

/// Errors produced by the suggestion sources and the index loader.
///
/// The controller itself never fails; per the degrade-gracefully policy a
/// failed fetch is reported to it as an empty result set.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "remote")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
