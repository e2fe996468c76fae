//! Error types for drill-core.

use crate::types::SessionPhase;
use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Contract violations raised by the study session engine.
///
/// These indicate a caller bug (rating with no card on screen, acting in the
/// wrong phase), not a runtime condition to recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no current card at index {index} (deck has {len} cards)")]
    NoCurrentCard { index: usize, len: usize },

    #[error("`{operation}` is not allowed in the {phase} phase")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },

    #[error("invalid confidence rating value: {0}")]
    InvalidRating(u8),
}

/// Errors reported by a storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
