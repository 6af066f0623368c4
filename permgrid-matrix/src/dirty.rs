//! Navigation guard.

use crate::MatrixState;
use serde::Serialize;

/// Snapshot of the dirty state for the hosting surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirtyGuard {
    pub dirty: bool,
    /// Differing (resource, code) pairs.
    pub change_count: usize,
    /// Resources with at least one differing pair.
    pub changed_resources: usize,
}

impl MatrixState {
    /// True when `working` differs from `original` in at least one cell.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.change_count() > 0
    }

    #[must_use]
    pub fn dirty_guard(&self) -> DirtyGuard {
        let change_count = self.change_count();
        DirtyGuard {
            dirty: change_count > 0,
            change_count,
            changed_resources: self.changed_keys().len(),
        }
    }
}
