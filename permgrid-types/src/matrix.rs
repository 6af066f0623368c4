//! Sparse assignment matrix.
//!
//! `resource_key -> (permission_code -> Effect)`. An absent entry means
//! [`Effect::Unset`], and `Unset` is never stored: setting it deletes the
//! entry, and a row that becomes empty is removed as well. Two matrices are
//! therefore equal exactly when they assign the same non-`Unset` effects.

use crate::Effect;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

type Row = BTreeMap<String, Effect>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Row>", into = "BTreeMap<String, Row>")]
pub struct AssignmentMatrix {
    rows: BTreeMap<String, Row>,
}

impl AssignmentMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the effect for a cell, `Unset` if absent.
    #[must_use]
    pub fn get(&self, resource_key: &str, code: &str) -> Effect {
        self.rows
            .get(resource_key)
            .and_then(|row| row.get(code))
            .copied()
            .unwrap_or(Effect::Unset)
    }

    /// Sets a cell and returns its previous effect.
    pub fn set(&mut self, resource_key: &str, code: &str, effect: Effect) -> Effect {
        if effect.is_unset() {
            return self.remove(resource_key, code);
        }
        self.rows
            .entry(resource_key.to_string())
            .or_default()
            .insert(code.to_string(), effect)
            .unwrap_or(Effect::Unset)
    }

    /// Clears a cell and returns its previous effect.
    pub fn remove(&mut self, resource_key: &str, code: &str) -> Effect {
        let Some(row) = self.rows.get_mut(resource_key) else {
            return Effect::Unset;
        };
        let previous = row.remove(code).unwrap_or(Effect::Unset);
        if row.is_empty() {
            self.rows.remove(resource_key);
        }
        previous
    }

    /// The stored (non-`Unset`) effects of one resource.
    #[must_use]
    pub fn row(&self, resource_key: &str) -> Option<&BTreeMap<String, Effect>> {
        self.rows.get(resource_key)
    }

    /// Resource keys with at least one stored effect, in key order.
    pub fn resource_keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Every stored cell as `(resource_key, code, effect)`.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, Effect)> {
        self.rows.iter().flat_map(|(key, row)| {
            row.iter()
                .map(move |(code, effect)| (key.as_str(), code.as_str(), *effect))
        })
    }

    /// Union of the resource keys present in either matrix.
    #[must_use]
    pub fn union_keys<'a>(&'a self, other: &'a Self) -> BTreeSet<&'a str> {
        self.resource_keys().chain(other.resource_keys()).collect()
    }

    /// Union of the codes stored for `resource_key` in either matrix.
    #[must_use]
    pub fn union_codes<'a>(&'a self, other: &'a Self, resource_key: &str) -> BTreeSet<&'a str> {
        let mine = self.rows.get(resource_key).into_iter().flat_map(|r| r.keys());
        let theirs = other.rows.get(resource_key).into_iter().flat_map(|r| r.keys());
        mine.chain(theirs).map(String::as_str).collect()
    }

    /// Number of resources with at least one stored effect.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of stored cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<BTreeMap<String, Row>> for AssignmentMatrix {
    fn from(raw: BTreeMap<String, Row>) -> Self {
        let rows = raw
            .into_iter()
            .map(|(key, row)| {
                let row: Row = row.into_iter().filter(|(_, e)| !e.is_unset()).collect();
                (key, row)
            })
            .filter(|(_, row)| !row.is_empty())
            .collect();
        Self { rows }
    }
}

impl From<AssignmentMatrix> for BTreeMap<String, Row> {
    fn from(matrix: AssignmentMatrix) -> Self {
        matrix.rows
    }
}

impl<K, C> FromIterator<(K, C, Effect)> for AssignmentMatrix
where
    K: AsRef<str>,
    C: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, C, Effect)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for (key, code, effect) in iter {
            matrix.set(key.as_ref(), code.as_ref(), effect);
        }
        matrix
    }
}
