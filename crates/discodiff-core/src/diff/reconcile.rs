//! Keyed-collection reconciliation.
//!
//! Schemas, resources and methods are all unordered collections addressed by
//! a key. [`reconcile`] pairs old and new elements by key and classifies each
//! pairing; it is written once and instantiated per element type through the
//! [`Element`] trait.

use std::collections::{BTreeMap, BTreeSet};

use super::model::{ChangeType, DiffEntry, ElementKind};
use super::options::DiffOptions;
use crate::errors::{DiffError, Result};

/// An element type that can be reconciled as part of a keyed collection.
///
/// `Default` supplies the zero value an added element is compared against.
pub(crate) trait Element: Default {
    /// Kind tag of the composite entry emitted for this element
    const KIND: ElementKind;

    /// Diff two instances, producing the children of the element's entry.
    ///
    /// `id` is the dotted id of the element itself; nested collections use it
    /// as their prefix.
    fn compare(id: &str, old: &Self, new: &Self, options: &DiffOptions) -> Result<Vec<DiffEntry>>;
}

/// Index a name-keyed sequence into a key → element map.
///
/// # Errors
///
/// `DuplicateKey` if two elements share a key.
pub(crate) fn index_by_name<'a, T, F>(
    collection: &str,
    items: &'a [T],
    key: F,
) -> Result<BTreeMap<&'a str, &'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut index = BTreeMap::new();
    for item in items {
        let name = key(item);
        if index.insert(name, item).is_some() {
            return Err(DiffError::DuplicateKey {
                collection: collection.to_string(),
                key: name.to_string(),
            });
        }
    }
    Ok(index)
}

/// Borrow a map keyed by owned strings as a `&str`-keyed index.
pub(crate) fn index_map<T>(map: &BTreeMap<String, T>) -> BTreeMap<&str, &T> {
    map.iter().map(|(k, v)| (k.as_str(), v)).collect()
}

/// Reconcile two keyed collections.
///
/// Emits one composite entry per key that changed, in ascending order of the
/// key union. Element ids are `<prefix>.<key>`.
///
/// # Errors
///
/// Propagates any precondition violation raised while comparing elements.
pub(crate) fn reconcile<T: Element>(
    prefix: &str,
    old: &BTreeMap<&str, &T>,
    new: &BTreeMap<&str, &T>,
    options: &DiffOptions,
) -> Result<Vec<DiffEntry>> {
    let keys: BTreeSet<&str> = old.keys().chain(new.keys()).copied().collect();
    let zero = T::default();

    let mut entries = Vec::new();
    for key in keys {
        let id = format!("{}.{}", prefix, key);
        match (old.get(key), new.get(key)) {
            (None, Some(added)) => {
                let children = T::compare(&id, &zero, added, options)?;
                if !children.is_empty() {
                    let entry = DiffEntry::composite(ChangeType::Modify, T::KIND, id, children);
                    entries.extend(amend_change_type(vec![entry], ChangeType::Add));
                }
            }
            (Some(_), None) => {
                entries.push(DiffEntry::composite(
                    ChangeType::Delete,
                    T::KIND,
                    id,
                    Vec::new(),
                ));
            }
            (Some(before), Some(after)) => {
                let children = T::compare(&id, before, after, options)?;
                if !children.is_empty() {
                    entries.push(DiffEntry::composite(
                        ChangeType::Modify,
                        T::KIND,
                        id,
                        children,
                    ));
                }
            }
            (None, None) => {}
        }
    }

    tracing::debug!(
        prefix,
        kind = ?T::KIND,
        old_len = old.len(),
        new_len = new.len(),
        changed = entries.len(),
        "reconciled keyed collection"
    );
    Ok(entries)
}

/// Rewrite the change type of every entry in a forest, recursively.
pub fn amend_change_type(entries: Vec<DiffEntry>, change_type: ChangeType) -> Vec<DiffEntry> {
    entries
        .into_iter()
        .map(|entry| DiffEntry {
            change_type,
            children: amend_change_type(entry.children, change_type),
            ..entry
        })
        .collect()
}
