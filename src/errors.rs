// src/errors.rs
use std::io;

/// Errors surfaced while building, persisting, or loading the index.
///
/// Query evaluation itself has no error path: vectorization and the
/// dominance test are total over any finite string.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Word list or index file missing/unreadable.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisted index failed its magic/version/structure check.
    #[error("invalid index format: {reason}")]
    Format { reason: String },

    /// Index could not be serialized for persistence.
    #[error("index encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}
