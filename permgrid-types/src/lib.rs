//! Core type definitions for permgrid.
//!
//! This crate defines the plain data types shared by every other crate in
//! the workspace:
//! - Role identifiers (UUID v7)
//! - The tri-state [`Effect`] and the sparse [`AssignmentMatrix`]
//! - The resource tree ([`Resource`]) and the [`PermissionCatalog`]
//! - Derived change records and the diff-style [`SavePayload`]
//!
//! Nothing here knows about `original` vs. `working`; that lives in
//! `permgrid-matrix`.

mod catalog;
mod change;
mod effect;
mod ids;
mod matrix;
mod resource;

pub use catalog::{PermissionCatalog, PermissionCode};
pub use change::{ChangeRecord, SaveItem, SavePayload};
pub use effect::Effect;
pub use ids::RoleId;
pub use matrix::AssignmentMatrix;
pub use resource::{Resource, ResourceType};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid effect: {0}")]
    InvalidEffect(String),
}
