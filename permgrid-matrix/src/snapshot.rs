//! Converts the collaborator's assignment list into a sparse matrix.
//!
//! The upstream shape is `[{resourceKey, permissionCodes[], effect?}]`.
//! Older servers omit `effect` and mean "these codes are granted"; the
//! effect used for such records is [`IngestOptions::legacy_default_effect`].
//! The default applies here only, never when diffing.

use permgrid_tree::resource_keys;
use permgrid_types::{AssignmentMatrix, Effect, PermissionCatalog, Resource};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// One record of an assignment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub resource_key: String,
    #[serde(default)]
    pub permission_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

impl SnapshotRecord {
    pub fn new<I, S>(resource_key: impl Into<String>, codes: I, effect: Option<Effect>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resource_key: resource_key.into(),
            permission_codes: codes.into_iter().map(Into::into).collect(),
            effect,
        }
    }
}

/// Ingestion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestOptions {
    /// Effect for records that list codes without an explicit effect.
    /// `Unset` ignores such records entirely.
    pub legacy_default_effect: Effect,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            legacy_default_effect: Effect::Allow,
        }
    }
}

/// Result of a catalog-checked ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub matrix: AssignmentMatrix,
    /// `(resource_key, code)` pairs dropped because the tree or catalog does
    /// not know them.
    pub dropped: Vec<(String, String)>,
}

/// The effect a record assigns, or `None` for a legacy record under an
/// `Unset` default. Such records must not clear cells set by other records.
fn record_effect(record: &SnapshotRecord, options: &IngestOptions) -> Option<Effect> {
    match record.effect {
        Some(effect) => Some(effect),
        None if options.legacy_default_effect.is_unset() => None,
        None => Some(options.legacy_default_effect),
    }
}

/// Builds a matrix from snapshot records. Later records win when two
/// records name the same cell.
pub fn ingest_snapshot(records: &[SnapshotRecord], options: &IngestOptions) -> AssignmentMatrix {
    let mut matrix = AssignmentMatrix::new();
    for record in records {
        let Some(effect) = record_effect(record, options) else {
            continue;
        };
        for code in &record.permission_codes {
            let previous = matrix.set(&record.resource_key, code, effect);
            if !previous.is_unset() && previous != effect {
                debug!(
                    "Snapshot overrides {} {} from {} to {}",
                    record.resource_key, code, previous, effect
                );
            }
        }
    }
    matrix
}

/// Like [`ingest_snapshot`], but drops cells whose resource is not in
/// `tree` or whose code is not in `catalog`, so the working copy never
/// starts with keys outside the supplied universe.
pub fn ingest_snapshot_for(
    records: &[SnapshotRecord],
    options: &IngestOptions,
    tree: &[Resource],
    catalog: &PermissionCatalog,
) -> IngestReport {
    let known: HashSet<String> = resource_keys(tree).into_iter().collect();
    let mut report = IngestReport::default();
    for record in records {
        let Some(effect) = record_effect(record, options) else {
            continue;
        };
        for code in &record.permission_codes {
            if !known.contains(&record.resource_key) || !catalog.contains(code) {
                report.dropped.push((record.resource_key.clone(), code.clone()));
                continue;
            }
            report.matrix.set(&record.resource_key, code, effect);
        }
    }
    if !report.dropped.is_empty() {
        warn!(
            "Dropped {} snapshot cells naming unknown resources or codes",
            report.dropped.len()
        );
    }
    report
}
