//! Error types for the session layer.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures reported by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    /// The server's copy moved on (e.g. a resource or code was removed
    /// after the tree was loaded). Refetch and retry.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller may not change this role's assignments.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors that can occur in session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Resource key not present in the loaded tree.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Permission code not present in the catalog.
    #[error("unknown permission code: {0}")]
    UnknownPermission(String),

    /// Save rejected by the persistence collaborator. `working` is intact.
    #[error("save failed: {0}")]
    Persist(#[from] PersistError),
}

/// Errors loading an editor config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
