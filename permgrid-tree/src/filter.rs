use permgrid_types::{Resource, ResourceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active predicates for [`filter_tree`]. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Substring matched against a node's name or key. Blank means inactive.
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
    /// Keep only nodes whose key is in the changed set.
    #[serde(default)]
    pub only_changed: bool,
    /// Compare the keyword case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

impl FilterCriteria {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    #[must_use]
    pub fn only_changed(mut self) -> Self {
        self.only_changed = true;
        self
    }

    /// True when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_keyword().is_none() && self.resource_type.is_none() && !self.only_changed
    }

    fn active_keyword(&self) -> Option<&str> {
        self.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

struct Matcher<'a> {
    needle: Option<String>,
    case_sensitive: bool,
    resource_type: Option<ResourceType>,
    changed: Option<&'a BTreeSet<String>>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &FilterCriteria, changed_keys: &'a BTreeSet<String>) -> Self {
        let needle = criteria.active_keyword().map(|k| {
            if criteria.case_sensitive {
                k.to_string()
            } else {
                k.to_lowercase()
            }
        });
        Self {
            needle,
            case_sensitive: criteria.case_sensitive,
            resource_type: criteria.resource_type,
            changed: criteria.only_changed.then_some(changed_keys),
        }
    }

    fn matches(&self, node: &Resource) -> bool {
        if let Some(needle) = &self.needle {
            let hit = if self.case_sensitive {
                node.name.contains(needle.as_str()) || node.key.contains(needle.as_str())
            } else {
                node.name.to_lowercase().contains(needle.as_str())
                    || node.key.to_lowercase().contains(needle.as_str())
            };
            if !hit {
                return false;
            }
        }
        if let Some(ty) = self.resource_type {
            if node.resource_type != ty {
                return false;
            }
        }
        if let Some(changed) = self.changed {
            if !changed.contains(&node.key) {
                return false;
            }
        }
        true
    }

    /// Rebuilds `node` if it or any descendant matches.
    fn retain(&self, node: &Resource) -> Option<Resource> {
        let children: Vec<Resource> = node.children.iter().filter_map(|c| self.retain(c)).collect();
        if children.is_empty() && !self.matches(node) {
            return None;
        }
        Some(Resource {
            id: node.id.clone(),
            key: node.key.clone(),
            name: node.name.clone(),
            resource_type: node.resource_type,
            enabled: node.enabled,
            children,
        })
    }
}

/// Returns a new forest holding every node that matches all active
/// predicates, plus the ancestors of such nodes as connective structure.
///
/// Children of a retained node are themselves filtered: a matching menu does
/// not drag in non-matching leaves. With no active predicate the result is a
/// full copy of `tree`.
pub fn filter_tree(
    tree: &[Resource],
    criteria: &FilterCriteria,
    changed_keys: &BTreeSet<String>,
) -> Vec<Resource> {
    if criteria.is_empty() {
        return tree.to_vec();
    }
    let matcher = Matcher::new(criteria, changed_keys);
    tree.iter().filter_map(|node| matcher.retain(node)).collect()
}
