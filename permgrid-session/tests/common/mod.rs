//! Shared test helpers for session tests.

#![allow(dead_code)]

use async_trait::async_trait;
use permgrid_matrix::SnapshotRecord;
use permgrid_session::{AssignmentStore, EditSession, EditorConfig, PersistError};
use permgrid_types::{AssignmentMatrix, Effect, PermissionCatalog, Resource, RoleId, SavePayload};
use std::sync::Mutex;

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn tree() -> Vec<Resource> {
    vec![
        Resource::menu("sys", "System").with_children(vec![
            Resource::menu("sys.users", "Users").with_children(vec![
                Resource::component("sys.users.add", "Add user"),
                Resource::component("sys.users.export", "Export CSV"),
            ]),
            Resource::menu("sys.roles", "Roles"),
        ]),
        Resource::menu("audit", "Audit log"),
    ]
}

pub fn catalog() -> PermissionCatalog {
    PermissionCatalog::from_values(["VIEW", "EDIT", "DELETE"])
}

pub fn snapshot() -> Vec<SnapshotRecord> {
    vec![
        SnapshotRecord::new("sys", ["VIEW"], None),
        SnapshotRecord::new("sys.users", ["VIEW", "EDIT"], Some(Effect::Allow)),
        SnapshotRecord::new("audit", ["DELETE"], Some(Effect::Deny)),
    ]
}

pub fn session() -> EditSession {
    init_tracing();
    EditSession::new(RoleId::new(), tree(), catalog(), &snapshot(), EditorConfig::default())
}

/// In-memory persistence double: applies payloads to a server-side matrix,
/// or fails with a preset error.
pub struct MemoryStore {
    pub server: Mutex<AssignmentMatrix>,
    pub calls: Mutex<Vec<(RoleId, SavePayload)>>,
    pub fail_with: Mutex<Option<PersistError>>,
}

impl MemoryStore {
    pub fn new(server: AssignmentMatrix) -> Self {
        Self {
            server: Mutex::new(server),
            calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    pub fn failing(error: PersistError) -> Self {
        let store = Self::new(AssignmentMatrix::new());
        *store.fail_with.lock().unwrap() = Some(error);
        store
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn save_assignments(&self, role_id: RoleId, payload: &SavePayload) -> Result<(), PersistError> {
        self.calls.lock().unwrap().push((role_id, payload.clone()));
        if let Some(e) = self.fail_with.lock().unwrap().clone() {
            return Err(e);
        }
        payload.apply_to(&mut self.server.lock().unwrap());
        Ok(())
    }
}
