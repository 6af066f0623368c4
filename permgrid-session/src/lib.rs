//! Editing session for one role's permission assignments.
//!
//! An [`EditSession`] ties together the inputs a management surface loads
//! (resource tree, permission catalog, assignment snapshot) with the
//! `permgrid-matrix` engine, and adds the parts that need context:
//!
//! - key validation, so `working` never names unknown resources or codes
//! - the active tree filter and the keys it leaves visible
//! - save coordination across the single async boundary
//!
//! # Saving
//!
//! The save call is the only await point. [`EditSession::begin_save`]
//! snapshots the role identity and payload into a [`SaveTicket`]; the host
//! submits it; [`EditSession::finish_save`] commits only if the session is
//! still editing the same role. A failed save leaves `working` untouched.
//!
//! ```
//! use permgrid_session::{EditSession, EditorConfig};
//! use permgrid_types::{Effect, PermissionCatalog, Resource, RoleId};
//!
//! let tree = vec![Resource::menu("menu.a", "Accounts")];
//! let catalog = PermissionCatalog::from_values(["VIEW", "EDIT"]);
//! let mut session = EditSession::new(RoleId::new(), tree, catalog, &[], EditorConfig::default());
//!
//! session.toggle("menu.a", "VIEW").unwrap();
//! assert!(session.is_dirty());
//! assert_eq!(session.save_payload().items[0].effect, Effect::Allow);
//! ```

mod config;
mod error;
mod save;
mod session;
mod store;

pub use config::EditorConfig;
pub use error::{ConfigError, PersistError, SessionError, SessionResult};
pub use save::{SaveOutcome, SaveTicket};
pub use session::EditSession;
pub use store::AssignmentStore;
