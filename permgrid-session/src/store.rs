//! Persistence collaborator seam.

use crate::error::PersistError;
use async_trait::async_trait;
use permgrid_types::{RoleId, SavePayload};

/// Submits a diff-style payload for one role.
///
/// Implementations apply the items as a partial update; an `Unset` item
/// clears the assignment. The session never calls this with an empty
/// payload.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn save_assignments(&self, role_id: RoleId, payload: &SavePayload) -> Result<(), PersistError>;
}
