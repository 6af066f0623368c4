//! Derived change records and the diff-style save payload.

use crate::{AssignmentMatrix, Effect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One differing cell between the original and working matrices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub resource_key: String,
    pub permission_code: String,
    pub from: Effect,
    pub to: Effect,
}

impl ChangeRecord {
    /// Renders the record with a custom label for `Unset`.
    #[must_use]
    pub fn render(&self, unset_label: &str) -> String {
        let label = |e: Effect| if e.is_unset() { unset_label } else { e.label() };
        format!(
            "{} {}: {} -> {}",
            self.resource_key,
            self.permission_code,
            label(self.from),
            label(self.to)
        )
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Effect::Unset.label()))
    }
}

/// A single entry of a save payload. `effect == Unset` means
/// "clear this assignment".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveItem {
    pub resource_key: String,
    pub permission_code: String,
    pub effect: Effect,
}

/// Minimal set of changes to submit to a partial-update endpoint.
///
/// Each (resource, code) pair appears at most once, so applying the items in
/// any order yields the same matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    pub items: Vec<SaveItem>,
}

impl SavePayload {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replays every item onto `matrix`.
    pub fn apply_to(&self, matrix: &mut AssignmentMatrix) {
        for item in &self.items {
            matrix.set(&item.resource_key, &item.permission_code, item.effect);
        }
    }

    /// Serializes to the JSON body expected by the update endpoint.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
