//! Assignment matrix editing for permgrid.
//!
//! [`MatrixState`] owns the two live matrices of an editing session:
//!
//! - `original`: the last server-confirmed snapshot, the diff baseline
//! - `working`: the in-progress copy every mutation writes to
//!
//! Operations are grouped by concern:
//!
//! - **store**: create, read, commit, reset
//! - **cell**: tri-state toggle and explicit set of one cell
//! - **bulk**: row, column, subtree cascade, select-all
//! - **diff**: changed keys, change count, preview, save payload
//! - **dirty**: derived dirty flag for navigation guards
//! - **snapshot**: converts the collaborator's assignment list into a matrix
//!
//! Dirty state is never tracked incrementally. Every diff query compares
//! `working` against `original` cell by cell, so no sequence of bulk edits
//! can leave a stale flag behind.

mod bulk;
mod cell;
mod diff;
mod dirty;
mod snapshot;
mod store;

pub use diff::count_differences;
pub use dirty::DirtyGuard;
pub use snapshot::{ingest_snapshot, ingest_snapshot_for, IngestOptions, IngestReport, SnapshotRecord};
pub use store::MatrixState;
