use thiserror::Error;

use crate::domain::{BumpType, IncrementError, Scheme};

/// Unified error type for tag-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Unsupported version scheme: {0}")]
    InvalidScheme(String),

    #[error("Failed to parse tag: {0}")]
    UnparseableTag(String),

    #[error(
        "Unsupported semantic version type {0}. Must be one of ({accepted})",
        accepted = BumpType::accepted_list()
    )]
    UnsupportedBumpType(String),

    #[error("Failed to compute next {scheme} tag: {source}")]
    IncrementFailure {
        scheme: Scheme,
        #[source]
        source: IncrementError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to list tags: {0}")]
    TagListing(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Release publishing failed: {0}")]
    Publish(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a publishing error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        ReleaseError::Publish(msg.into())
    }

    /// Wrap a failed increment for the given scheme
    pub fn increment(scheme: Scheme, source: IncrementError) -> Self {
        ReleaseError::IncrementFailure { scheme, source }
    }
}
