//! Tri-state assignment value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value assigned to a (resource, permission code) pair.
///
/// `Unset` is a real variant rather than an `Option`: a sparse matrix never
/// stores it, but every lookup can return it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    Allow,
    Deny,
    #[default]
    Unset,
}

impl Effect {
    /// All three variants in cycle order.
    pub const ALL: [Effect; 3] = [Effect::Unset, Effect::Allow, Effect::Deny];

    /// Next value in the `UNSET → ALLOW → DENY → UNSET` cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unset => Self::Allow,
            Self::Allow => Self::Deny,
            Self::Deny => Self::Unset,
        }
    }

    /// Returns true for `Unset`.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Wire name, as used in snapshots and save payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::Deny => "DENY",
            Self::Unset => "UNSET",
        }
    }

    /// Human-readable label for change previews. `Unset` renders as `NONE`
    /// so cleared assignments stay visible to a reviewer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::Deny => "DENY",
            Self::Unset => "NONE",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALLOW" => Ok(Self::Allow),
            "DENY" => Ok(Self::Deny),
            "UNSET" | "NONE" | "" => Ok(Self::Unset),
            other => Err(crate::Error::InvalidEffect(other.to_string())),
        }
    }
}
