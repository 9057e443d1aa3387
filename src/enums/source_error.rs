use thiserror::Error;
use crate::enums::source_error_kind::SourceErrorKind;

/// Per-repository fetch failures. Never fatal to a pass; the orchestrator
/// records the kind in the scan result and moves on.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Repository not found: {0}")]
    NotFound(String),
    #[error("Transient network error: {0}")]
    TransientNetwork(String),
}

impl SourceError {
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            SourceError::RateLimited(_) => SourceErrorKind::RateLimited,
            SourceError::NotFound(_) => SourceErrorKind::NotFound,
            SourceError::TransientNetwork(_) => SourceErrorKind::TransientNetwork,
        }
    }
}
