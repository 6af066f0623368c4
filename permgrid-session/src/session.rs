//! The editing session.

use crate::config::EditorConfig;
use crate::error::{SessionError, SessionResult};
use permgrid_matrix::{ingest_snapshot_for, DirtyGuard, MatrixState, SnapshotRecord};
use permgrid_tree::{filter_tree, resource_keys, FilterCriteria};
use permgrid_types::{ChangeRecord, Effect, PermissionCatalog, Resource, RoleId, SavePayload};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// One role's assignments under edit, plus the tree and catalog they are
/// edited against.
#[derive(Debug)]
pub struct EditSession {
    pub(crate) role_id: RoleId,
    /// Bumped on every reload so in-flight saves can tell they are stale.
    pub(crate) generation: u64,
    tree: Vec<Resource>,
    known_keys: HashSet<String>,
    catalog: PermissionCatalog,
    pub(crate) state: MatrixState,
    criteria: FilterCriteria,
    config: EditorConfig,
}

impl EditSession {
    /// Opens a session. Snapshot cells naming resources or codes outside
    /// `tree` / `catalog` are dropped.
    pub fn new(
        role_id: RoleId,
        tree: Vec<Resource>,
        catalog: PermissionCatalog,
        snapshot: &[SnapshotRecord],
        config: EditorConfig,
    ) -> Self {
        let report = ingest_snapshot_for(snapshot, &config.ingest_options(), &tree, &catalog);
        let criteria = FilterCriteria {
            case_sensitive: config.keyword_case_sensitive,
            ..FilterCriteria::default()
        };
        info!(
            "Opened session for role {} ({} resources, {} codes, {} assignments)",
            role_id,
            report.matrix.resource_count(),
            catalog.len(),
            report.matrix.cell_count()
        );
        Self {
            role_id,
            generation: 0,
            known_keys: resource_keys(&tree).into_iter().collect(),
            tree,
            catalog,
            state: MatrixState::new(report.matrix),
            criteria,
            config,
        }
    }

    /// Switches to another role (or reloads the same one). Any unsaved
    /// edits are discarded and in-flight saves become stale.
    pub fn load_role(
        &mut self,
        role_id: RoleId,
        tree: Vec<Resource>,
        catalog: PermissionCatalog,
        snapshot: &[SnapshotRecord],
    ) {
        let report = ingest_snapshot_for(snapshot, &self.config.ingest_options(), &tree, &catalog);
        if self.state.is_dirty() {
            info!(
                "Discarding {} unsaved changes for role {}",
                self.state.change_count(),
                self.role_id
            );
        }
        self.role_id = role_id;
        self.generation += 1;
        self.known_keys = resource_keys(&tree).into_iter().collect();
        self.tree = tree;
        self.catalog = catalog;
        self.state = MatrixState::new(report.matrix);
        info!("Loaded role {} (generation {})", role_id, self.generation);
    }

    /// Replaces the resource tree while keeping every edit.
    ///
    /// Edits on keys the new tree no longer has stay in the diff; they are
    /// only hidden from the filtered view.
    pub fn replace_tree(&mut self, tree: Vec<Resource>) {
        self.known_keys = resource_keys(&tree).into_iter().collect();
        self.tree = tree;
        let stray = self
            .state
            .changed_keys()
            .into_iter()
            .filter(|k| !self.known_keys.contains(k))
            .count();
        if stray > 0 {
            debug!("{} changed resources are no longer in the tree", stray);
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn role_id(&self) -> RoleId {
        self.role_id
    }

    pub fn tree(&self) -> &[Resource] {
        &self.tree
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &MatrixState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Every resource key in the tree, pre-order.
    pub fn all_keys(&self) -> Vec<String> {
        resource_keys(&self.tree)
    }

    /// Working effect of a cell.
    pub fn effect(&self, resource_key: &str, code: &str) -> Effect {
        self.state.get(resource_key, code)
    }

    // ── Validation ───────────────────────────────────────────────

    fn check_resource(&self, resource_key: &str) -> SessionResult<()> {
        if self.known_keys.contains(resource_key) {
            Ok(())
        } else {
            Err(SessionError::UnknownResource(resource_key.to_string()))
        }
    }

    fn check_code(&self, code: &str) -> SessionResult<()> {
        if self.catalog.contains(code) {
            Ok(())
        } else {
            Err(SessionError::UnknownPermission(code.to_string()))
        }
    }

    fn check_resources<S: AsRef<str>>(&self, resource_keys: &[S]) -> SessionResult<()> {
        resource_keys
            .iter()
            .try_for_each(|k| self.check_resource(k.as_ref()))
    }

    // ── Mutations ────────────────────────────────────────────────
    //
    // Every key is validated before anything is written, so a rejected
    // bulk edit leaves `working` exactly as it was.

    /// Cycles one cell and returns its new effect.
    pub fn toggle(&mut self, resource_key: &str, code: &str) -> SessionResult<Effect> {
        self.check_resource(resource_key)?;
        self.check_code(code)?;
        Ok(self.state.toggle(resource_key, code))
    }

    /// Sets one cell and returns its previous effect.
    pub fn set_effect(&mut self, resource_key: &str, code: &str, effect: Effect) -> SessionResult<Effect> {
        self.check_resource(resource_key)?;
        self.check_code(code)?;
        Ok(self.state.set_effect(resource_key, code, effect))
    }

    /// Sets every catalog code on one resource.
    pub fn apply_row(&mut self, resource_key: &str, effect: Effect) -> SessionResult<()> {
        self.check_resource(resource_key)?;
        self.state.apply_row(resource_key, &self.catalog.values(), effect);
        Ok(())
    }

    /// Sets one code on exactly the given resources. Pass
    /// [`visible_keys`](Self::visible_keys) or [`all_keys`](Self::all_keys)
    /// to pick the scope.
    pub fn apply_column<S: AsRef<str>>(
        &mut self,
        code: &str,
        resource_keys: &[S],
        effect: Effect,
    ) -> SessionResult<()> {
        self.check_code(code)?;
        self.check_resources(resource_keys)?;
        self.state.apply_column(code, resource_keys, effect);
        Ok(())
    }

    /// Sets every catalog code on a resource and all of its descendants in
    /// the full tree, regardless of the active filter. Returns the number
    /// of resources touched.
    pub fn apply_subtree(&mut self, resource_key: &str, effect: Effect) -> SessionResult<usize> {
        self.check_resource(resource_key)?;
        let codes = self.catalog.values();
        Ok(self.state.apply_subtree(resource_key, &codes, effect, &self.tree))
    }

    /// Sets every catalog code on every given resource.
    pub fn apply_all<S: AsRef<str>>(&mut self, resource_keys: &[S], effect: Effect) -> SessionResult<()> {
        self.check_resources(resource_keys)?;
        self.state.apply_all(resource_keys, &self.catalog.values(), effect);
        Ok(())
    }

    /// Discards every edit.
    pub fn reset(&mut self) {
        debug!("Reset {} changes for role {}", self.state.change_count(), self.role_id);
        self.state.reset();
    }

    // ── Diff ─────────────────────────────────────────────────────

    pub fn changed_keys(&self) -> BTreeSet<String> {
        self.state.changed_keys()
    }

    pub fn change_count(&self) -> usize {
        self.state.change_count()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn dirty_guard(&self) -> DirtyGuard {
        self.state.dirty_guard()
    }

    /// Differing cells over the catalog, in key then catalog order.
    pub fn change_preview(&self) -> Vec<ChangeRecord> {
        self.state.change_preview(&self.catalog.values())
    }

    /// The preview rendered as text, using the configured `Unset` label.
    pub fn change_preview_lines(&self) -> Vec<String> {
        self.change_preview()
            .iter()
            .map(|r| r.render(&self.config.unset_label))
            .collect()
    }

    /// The minimal payload for the current edits.
    pub fn save_payload(&self) -> SavePayload {
        self.state.generate_save_payload(&self.catalog.values())
    }

    // ── Filtering ────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn clear_filter(&mut self) {
        self.criteria = FilterCriteria {
            case_sensitive: self.config.keyword_case_sensitive,
            ..FilterCriteria::default()
        };
    }

    /// The tree as the active filter leaves it.
    pub fn visible_tree(&self) -> Vec<Resource> {
        filter_tree(&self.tree, &self.criteria, &self.state.changed_keys())
    }

    /// Keys of every node in [`visible_tree`](Self::visible_tree),
    /// including connective ancestors.
    pub fn visible_keys(&self) -> Vec<String> {
        resource_keys(&self.visible_tree())
    }
}
