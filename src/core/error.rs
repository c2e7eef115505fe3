//! Error type for persistence operations.
//!
//! Only failures the caller must see are errors. Cancelled prompts and a
//! busy lock are reported as `Outcome`s by the session layer, and records
//! that reference cards, piles or players that no longer exist are skipped.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed remote command: {0}")]
    Wire(#[from] bincode::Error),

    #[error("malformed deck file: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid deck file: {0}")]
    Deck(String),

    #[error("deck belongs to game {found}, expected {expected}")]
    GameMismatch { expected: String, found: String },
}

impl PersistError {
    /// Wrap an i/o error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
