//! Diff between `original` and `working`.
//!
//! All queries walk the union of resource keys stored in either matrix.
//! Absent cells read as `Unset`, so "stored Unset" and "missing" can never
//! produce a phantom change.

use crate::MatrixState;
use permgrid_types::{AssignmentMatrix, ChangeRecord, Effect, SaveItem, SavePayload};
use std::collections::BTreeSet;

/// Visits every cell that differs between `from` and `to`, in key then
/// code order.
fn for_each_difference<'a>(
    from: &'a AssignmentMatrix,
    to: &'a AssignmentMatrix,
    mut visit: impl FnMut(&'a str, &'a str, Effect, Effect),
) {
    for key in from.union_keys(to) {
        for code in from.union_codes(to, key) {
            let (before, after) = (from.get(key, code), to.get(key, code));
            if before != after {
                visit(key, code, before, after);
            }
        }
    }
}

/// Number of cells whose effect differs between two matrices.
pub fn count_differences(a: &AssignmentMatrix, b: &AssignmentMatrix) -> usize {
    let mut count = 0;
    for_each_difference(a, b, |_, _, _, _| count += 1);
    count
}

impl MatrixState {
    /// Resources with at least one differing cell.
    #[must_use]
    pub fn changed_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        for_each_difference(&self.original, &self.working, |key, _, _, _| {
            keys.insert(key.to_string());
        });
        keys
    }

    /// Number of differing (resource, code) pairs.
    #[must_use]
    pub fn change_count(&self) -> usize {
        count_differences(&self.original, &self.working)
    }

    /// Every differing cell over the union of resource keys x `all_codes`,
    /// ordered by resource key, then by the order of `all_codes`.
    #[must_use]
    pub fn change_preview<S: AsRef<str>>(&self, all_codes: &[S]) -> Vec<ChangeRecord> {
        self.changed_cells(all_codes)
            .map(|(key, code, from, to)| ChangeRecord {
                resource_key: key.to_string(),
                permission_code: code.to_string(),
                from,
                to,
            })
            .collect()
    }

    /// The minimal payload that turns `original` into `working`.
    ///
    /// Each differing pair appears once with its working effect; `Unset`
    /// entries ask the server to clear the assignment.
    #[must_use]
    pub fn generate_save_payload<S: AsRef<str>>(&self, all_codes: &[S]) -> SavePayload {
        let items = self
            .changed_cells(all_codes)
            .map(|(key, code, _, to)| SaveItem {
                resource_key: key.to_string(),
                permission_code: code.to_string(),
                effect: to,
            })
            .collect();
        SavePayload { items }
    }

    fn changed_cells<'a, S: AsRef<str>>(
        &'a self,
        all_codes: &'a [S],
    ) -> impl Iterator<Item = (&'a str, &'a str, Effect, Effect)> + 'a {
        let mut seen = BTreeSet::new();
        let codes: Vec<&'a str> = all_codes
            .iter()
            .map(S::as_ref)
            .filter(|code| seen.insert(*code))
            .collect();
        self.original
            .union_keys(&self.working)
            .into_iter()
            .flat_map(move |key| codes.clone().into_iter().map(move |code| (key, code)))
            .filter_map(move |(key, code)| {
                let from = self.original.get(key, code);
                let to = self.working.get(key, code);
                (from != to).then_some((key, code, from, to))
            })
    }
}
