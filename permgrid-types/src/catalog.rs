//! Permission catalog: the ordered set of action codes a matrix column can hold.

use serde::{Deserialize, Serialize};

/// An action identifier that can be allowed or denied on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCode {
    /// Stable identifier (e.g. `VIEW`, `EDIT`).
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub sort_order: i32,
}

impl PermissionCode {
    pub fn new(value: impl Into<String>, label: impl Into<String>, sort_order: i32) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            sort_order,
        }
    }
}

/// Ordered list of permission codes.
///
/// Codes are kept sorted by `sort_order`; ties keep their supplied order.
/// Duplicate values are dropped, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PermissionCode>", into = "Vec<PermissionCode>")]
pub struct PermissionCatalog {
    codes: Vec<PermissionCode>,
}

impl PermissionCatalog {
    pub fn new(codes: Vec<PermissionCode>) -> Self {
        let mut deduped: Vec<PermissionCode> = Vec::with_capacity(codes.len());
        for code in codes {
            if !deduped.iter().any(|c| c.value == code.value) {
                deduped.push(code);
            }
        }
        deduped.sort_by_key(|c| c.sort_order);
        Self { codes: deduped }
    }

    /// Builds a catalog from bare values, using each value as its label and
    /// its position as the sort order.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let v = v.into();
                PermissionCode::new(v.clone(), v, i as i32)
            })
            .collect();
        Self::new(codes)
    }

    /// Codes in display order.
    #[must_use]
    pub fn codes(&self) -> &[PermissionCode] {
        &self.codes
    }

    /// Code values in display order, the shape bulk and diff operations take.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.codes.iter().map(|c| c.value.clone()).collect()
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.codes.iter().any(|c| c.value == value)
    }

    #[must_use]
    pub fn get(&self, value: &str) -> Option<&PermissionCode> {
        self.codes.iter().find(|c| c.value == value)
    }

    /// Display position of a code, if it is in the catalog.
    #[must_use]
    pub fn position(&self, value: &str) -> Option<usize> {
        self.codes.iter().position(|c| c.value == value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl From<Vec<PermissionCode>> for PermissionCatalog {
    fn from(codes: Vec<PermissionCode>) -> Self {
        Self::new(codes)
    }
}

impl From<PermissionCatalog> for Vec<PermissionCode> {
    fn from(catalog: PermissionCatalog) -> Self {
        catalog.codes
    }
}
