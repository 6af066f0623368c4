//! Resource tree model.
//!
//! Resources arrive from a collaborator as an ordered forest. The tree is
//! treated as immutable input: filtering produces new nodes and never edits
//! the source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of addressable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// Navigation entry (may own child menus or components).
    Menu,
    /// UI control inside a menu page (button, tab, field).
    Component,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => f.write_str("MENU"),
            Self::Component => f.write_str("COMPONENT"),
        }
    }
}

/// A node in the resource tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    /// Globally unique, stable key. Assignments are addressed by this.
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub children: Vec<Resource>,
}

fn default_enabled() -> bool {
    true
}

impl Resource {
    /// Creates an enabled leaf resource. `id` defaults to the key.
    pub fn new(key: impl Into<String>, name: impl Into<String>, resource_type: ResourceType) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            key,
            name: name.into(),
            resource_type,
            enabled: true,
            children: Vec::new(),
        }
    }

    /// Shorthand for a menu node.
    pub fn menu(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(key, name, ResourceType::Menu)
    }

    /// Shorthand for a component node.
    pub fn component(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(key, name, ResourceType::Component)
    }

    /// Builder-style child list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Resource>) -> Self {
        self.children = children;
        self
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
