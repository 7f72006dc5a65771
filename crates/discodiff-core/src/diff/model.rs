//! Diff tree output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Entry order is meaningful and fixed by the engine; nothing here sorts.

use serde::{Deserialize, Serialize};

/// Whether an element was added, modified, or deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    /// Present in the new document only
    Add,
    /// Present in both documents with differing content
    Modify,
    /// Present in the old document only
    Delete,
}

/// What kind of element a [`DiffEntry`] references.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    Schema,
    Resource,
    Method,
    StringField,
    BoolField,
}

impl ElementKind {
    /// True for kinds that carry children rather than values
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            ElementKind::Schema | ElementKind::Resource | ElementKind::Method
        )
    }
}

/// One change in a discovery document.
///
/// Composite entries (schema, resource, method) carry their field-level
/// changes as `children` and never carry values. Scalar entries carry
/// `old_value`/`new_value` and never carry children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffEntry {
    pub change_type: ChangeType,
    pub element_kind: ElementKind,
    /// Dotted path (`Schemas.Bucket`, `Resources.buckets.Methods.list`) for
    /// composite entries, field name (`Revision`) for scalar entries
    pub element_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub old_value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub new_value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DiffEntry>,
}

impl DiffEntry {
    /// Build a scalar `Modify` entry.
    pub fn scalar(
        element_kind: ElementKind,
        element_id: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        debug_assert!(!element_kind.is_composite());
        Self {
            change_type: ChangeType::Modify,
            element_kind,
            element_id: element_id.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
            children: Vec::new(),
        }
    }

    /// Build a composite entry with the given children.
    pub fn composite(
        change_type: ChangeType,
        element_kind: ElementKind,
        element_id: impl Into<String>,
        children: Vec<DiffEntry>,
    ) -> Self {
        debug_assert!(element_kind.is_composite());
        Self {
            change_type,
            element_kind,
            element_id: element_id.into(),
            old_value: String::new(),
            new_value: String::new(),
            children,
        }
    }
}
