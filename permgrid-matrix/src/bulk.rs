//! Bulk mutations.
//!
//! Every operation here is a loop of single-cell sets on `working`, run to
//! completion before returning. None of them takes an implicit scope: the
//! caller passes exactly the keys and codes to touch.

use crate::MatrixState;
use permgrid_tree::subtree_keys;
use permgrid_types::{Effect, Resource};
use tracing::debug;

impl MatrixState {
    /// Sets every code in `all_codes` on one resource.
    pub fn apply_row<S: AsRef<str>>(&mut self, resource_key: &str, all_codes: &[S], effect: Effect) {
        for code in all_codes {
            self.working.set(resource_key, code.as_ref(), effect);
        }
    }

    /// Sets one code on every resource in `resource_keys`.
    pub fn apply_column<S: AsRef<str>>(&mut self, code: &str, resource_keys: &[S], effect: Effect) {
        for key in resource_keys {
            self.working.set(key.as_ref(), code, effect);
        }
        debug!("Applied {} to column {} over {} resources", effect, code, resource_keys.len());
    }

    /// Applies a row to `resource_key` and every descendant of it.
    ///
    /// `tree` must be the complete resource tree, never a filtered view,
    /// or hidden descendants are skipped. Returns the number of resources
    /// touched (0 if `resource_key` is not in the tree).
    pub fn apply_subtree<S: AsRef<str>>(
        &mut self,
        resource_key: &str,
        all_codes: &[S],
        effect: Effect,
        tree: &[Resource],
    ) -> usize {
        let keys = subtree_keys(tree, resource_key);
        for key in &keys {
            self.apply_row(key, all_codes, effect);
        }
        debug!("Cascaded {} from {} to {} resources", effect, resource_key, keys.len());
        keys.len()
    }

    /// Sets every (resource, code) pair of the cross product.
    pub fn apply_all<K: AsRef<str>, C: AsRef<str>>(
        &mut self,
        resource_keys: &[K],
        all_codes: &[C],
        effect: Effect,
    ) {
        for key in resource_keys {
            self.apply_row(key.as_ref(), all_codes, effect);
        }
        debug!(
            "Applied {} to {} resources x {} codes",
            effect,
            resource_keys.len(),
            all_codes.len()
        );
    }
}
