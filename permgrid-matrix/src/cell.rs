//! Single-cell mutations.

use crate::MatrixState;
use permgrid_types::Effect;

impl MatrixState {
    /// Advances a cell one step around `UNSET → ALLOW → DENY → UNSET` and
    /// returns its new effect.
    pub fn toggle(&mut self, resource_key: &str, code: &str) -> Effect {
        let next = self.working.get(resource_key, code).next();
        self.working.set(resource_key, code, next);
        next
    }

    /// Sets a cell explicitly and returns its previous effect. `Unset`
    /// removes the entry, and the resource's row once it is empty.
    pub fn set_effect(&mut self, resource_key: &str, code: &str, effect: Effect) -> Effect {
        self.working.set(resource_key, code, effect)
    }
}
