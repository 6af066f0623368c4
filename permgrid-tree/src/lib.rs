//! Resource tree operations for permgrid.
//!
//! - [`flatten_tree`] / [`resource_keys`]: pre-order listing of every node
//! - [`find_resource`] / [`subtree_keys`]: lookups used by cascading edits
//! - [`filter_tree`]: keyword / type / only-changed filtering that keeps the
//!   ancestor chain of every match
//!
//! Everything here is a pure function over borrowed input. Filtering
//! allocates new nodes; the source tree is never touched, so cascading
//! operations can always walk the complete, unfiltered tree.

mod filter;
mod walk;

pub use filter::{filter_tree, FilterCriteria};
pub use walk::{find_resource, flatten_tree, resource_keys, subtree_keys};
