//! Original/working pair.

use permgrid_types::{AssignmentMatrix, Effect};
use serde::{Deserialize, Serialize};

/// The editable state of one role's assignments.
///
/// `working` always starts as an independent copy of `original`: cloning an
/// [`AssignmentMatrix`] clones every inner row, so an edit can never leak
/// into the baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixState {
    pub(crate) original: AssignmentMatrix,
    pub(crate) working: AssignmentMatrix,
}

impl MatrixState {
    /// Creates a state whose working copy equals `original`.
    #[must_use]
    pub fn new(original: AssignmentMatrix) -> Self {
        let working = original.clone();
        Self { original, working }
    }

    /// Working effect of a cell, `Unset` if absent.
    #[must_use]
    pub fn get(&self, resource_key: &str, code: &str) -> Effect {
        self.working.get(resource_key, code)
    }

    /// Baseline effect of a cell.
    #[must_use]
    pub fn original_effect(&self, resource_key: &str, code: &str) -> Effect {
        self.original.get(resource_key, code)
    }

    #[must_use]
    pub fn original(&self) -> &AssignmentMatrix {
        &self.original
    }

    #[must_use]
    pub fn working(&self) -> &AssignmentMatrix {
        &self.working
    }

    /// Accepts the working copy as the new baseline. Call after a
    /// successful save.
    pub fn commit(&mut self) {
        self.original = self.working.clone();
    }

    /// Accepts `snapshot` as the new baseline and leaves `working` alone.
    ///
    /// Used when the saved payload was generated from an earlier working
    /// copy: edits made since then stay dirty.
    pub fn commit_snapshot(&mut self, snapshot: AssignmentMatrix) {
        self.original = snapshot;
    }

    /// Discards every edit.
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }
}
