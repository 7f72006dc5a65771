//! Scalar field comparison.
//!
//! Each function yields at most one `Modify` entry and never recurses.

use super::model::{DiffEntry, ElementKind};
use super::options::DiffOptions;

/// Field id used for every description field.
pub const DESCRIPTION_FIELD: &str = "Description";

/// Compare two string values.
pub fn diff_string(id: &str, old: &str, new: &str) -> Option<DiffEntry> {
    (old != new).then(|| DiffEntry::scalar(ElementKind::StringField, id, old, new))
}

/// Compare two boolean values, rendering them as `true`/`false`.
pub fn diff_bool(id: &str, old: bool, new: bool) -> Option<DiffEntry> {
    (old != new).then(|| {
        DiffEntry::scalar(ElementKind::BoolField, id, old.to_string(), new.to_string())
    })
}

/// Accumulates the scalar diffs of one element in field order.
///
/// Description fields go through [`FieldDiffs::description`], which consults
/// the `descriptions` flag; everything else is compared unconditionally.
pub(crate) struct FieldDiffs<'o> {
    options: &'o DiffOptions,
    entries: Vec<DiffEntry>,
}

impl<'o> FieldDiffs<'o> {
    pub(crate) fn new(options: &'o DiffOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }

    pub(crate) fn string(mut self, id: &str, old: &str, new: &str) -> Self {
        self.entries.extend(diff_string(id, old, new));
        self
    }

    pub(crate) fn description(self, old: &str, new: &str) -> Self {
        if self.options.descriptions {
            self.string(DESCRIPTION_FIELD, old, new)
        } else {
            self
        }
    }

    pub(crate) fn boolean(mut self, id: &str, old: bool, new: bool) -> Self {
        self.entries.extend(diff_bool(id, old, new));
        self
    }

    pub(crate) fn finish(self) -> Vec<DiffEntry> {
        self.entries
    }
}
