use std::path::PathBuf;

use thiserror::Error;

/// Every failure a sync run can end with.
///
/// Resolution misses are not represented here: a title without a match is
/// recorded in the [`crate::sync::SyncReport`] and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read song list {}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authorization failed: {0}")]
    Auth(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
