//! Save coordination.

use crate::error::{PersistError, SessionResult};
use crate::session::EditSession;
use crate::store::AssignmentStore;
use permgrid_types::{AssignmentMatrix, RoleId, SavePayload};
use tracing::{debug, info, warn};

/// Everything needed to submit a save and later reconcile its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    pub role_id: RoleId,
    generation: u64,
    pub payload: SavePayload,
    /// The working copy the payload was generated from.
    snapshot: AssignmentMatrix,
}

/// What a finished save did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing differed; the store was not called.
    NoChanges,
    /// The payload was accepted and committed as the new baseline.
    Saved { items: usize },
    /// The session moved to another role (or reloaded) while the save was
    /// in flight. The result was ignored.
    Discarded { role_id: RoleId },
}

impl EditSession {
    /// Snapshots the current role and payload. Returns `None` when there is
    /// nothing to save.
    pub fn begin_save(&self) -> Option<SaveTicket> {
        let payload = self.save_payload();
        if payload.is_empty() {
            return None;
        }
        debug!("Prepared save of {} items for role {}", payload.len(), self.role_id);
        Some(SaveTicket {
            role_id: self.role_id,
            generation: self.generation,
            payload,
            snapshot: self.state.working().clone(),
        })
    }

    /// Reconciles a save result with the session.
    ///
    /// On success the saved snapshot becomes the baseline; edits made while
    /// the save was in flight stay dirty. On failure `working` is left
    /// untouched and the error is returned. A ticket from an earlier role
    /// or generation is discarded either way.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<(), PersistError>,
    ) -> SessionResult<SaveOutcome> {
        if ticket.role_id != self.role_id || ticket.generation != self.generation {
            warn!(
                "Discarding save result for role {} (session now on role {})",
                ticket.role_id, self.role_id
            );
            return Ok(SaveOutcome::Discarded {
                role_id: ticket.role_id,
            });
        }

        if let Err(e) = result {
            warn!("Save for role {} failed: {}", ticket.role_id, e);
            return Err(e.into());
        }

        let items = ticket.payload.len();
        if &ticket.snapshot == self.state.working() {
            self.state.commit();
        } else {
            debug!("Working copy changed during save; keeping newer edits dirty");
            self.state.commit_snapshot(ticket.snapshot);
        }
        info!("Saved {} items for role {}", items, ticket.role_id);
        Ok(SaveOutcome::Saved { items })
    }

    /// Generates the payload, submits it and reconciles the result.
    pub async fn save<S>(&mut self, store: &S) -> SessionResult<SaveOutcome>
    where
        S: AssignmentStore + ?Sized,
    {
        let Some(ticket) = self.begin_save() else {
            debug!("No changes to save for role {}", self.role_id);
            return Ok(SaveOutcome::NoChanges);
        };
        let result = store.save_assignments(ticket.role_id, &ticket.payload).await;
        self.finish_save(ticket, result)
    }
}
