//! Discovery document diff computation.
//!
//! The entry point is [`compare_documents`], which walks two parsed documents
//! and produces the ordered diff tree.

use super::field::FieldDiffs;
use super::model::DiffEntry;
use super::options::DiffOptions;
use super::reconcile::{index_by_name, index_map, reconcile};
use crate::errors::Result;
use crate::model::{Document, Resource};
use crate::{log_op_end, log_op_error, log_op_start};

/// Compare two discovery documents.
///
/// Returns the concatenation of every enabled category, always in the order
/// identifiers, versioning, service metadata, schemas, resources. Within a
/// keyed collection, entries follow ascending key order. Neither input is
/// modified, and the same inputs always produce the same tree.
///
/// # Errors
///
/// - `DuplicateKey`: a resource or method sequence on either side has two
///   siblings with the same name, anywhere in the tree, including under a
///   resource that was added or deleted. No partial diff is returned.
pub fn compare_documents(
    old: &Document,
    new: &Document,
    options: &DiffOptions,
) -> Result<Vec<DiffEntry>> {
    log_op_start!(
        "compare_documents",
        old_doc = old.id.as_str(),
        new_doc = new.id.as_str()
    );
    let start = std::time::Instant::now();

    let entries = compare_documents_impl(old, new, options).map_err(|e| {
        log_op_error!(
            "compare_documents",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare_documents",
        duration_ms = start.elapsed().as_millis() as u64,
        entry_count = entries.len() as u64
    );

    Ok(entries)
}

fn compare_documents_impl(
    old: &Document,
    new: &Document,
    options: &DiffOptions,
) -> Result<Vec<DiffEntry>> {
    if options.resources {
        check_resource_names("Resources", &old.resources)?;
        check_resource_names("Resources", &new.resources)?;
    }

    let mut entries = compare_identifiers(old, new, options);
    if options.versioning {
        entries.extend(compare_versioning(old, new, options));
    }
    if options.service {
        entries.extend(compare_service(old, new, options));
    }
    if options.schemas {
        entries.extend(compare_schemas(old, new, options)?);
    }
    if options.resources {
        entries.extend(compare_resources(old, new, options)?);
    }
    Ok(entries)
}

// Reconciliation only indexes subtrees present on both sides, so a deleted
// resource would otherwise go unchecked.
fn check_resource_names(prefix: &str, resources: &[Resource]) -> Result<()> {
    for (name, resource) in index_by_name(prefix, resources, |r| r.name.as_str())? {
        let id = format!("{}.{}", prefix, name);
        check_resource_names(&format!("{}.Resources", id), &resource.resources)?;
        index_by_name(&format!("{}.Methods", id), &resource.methods, |m| {
            m.name.as_str()
        })?;
    }
    Ok(())
}

fn compare_identifiers(old: &Document, new: &Document, options: &DiffOptions) -> Vec<DiffEntry> {
    FieldDiffs::new(options)
        .string("ID", &old.id, &new.id)
        .string("Name", &old.name, &new.name)
        .finish()
}

fn compare_versioning(old: &Document, new: &Document, options: &DiffOptions) -> Vec<DiffEntry> {
    FieldDiffs::new(options)
        .string("Version", &old.version, &new.version)
        .string("Revision", &old.revision, &new.revision)
        .finish()
}

fn compare_service(old: &Document, new: &Document, options: &DiffOptions) -> Vec<DiffEntry> {
    FieldDiffs::new(options)
        .string("Title", &old.title, &new.title)
        .string("RootURL", &old.root_url, &new.root_url)
        .string("ServicePath", &old.service_path, &new.service_path)
        .string("BasePath", &old.base_path, &new.base_path)
        .string(
            "DocumentationLink",
            &old.documentation_link,
            &new.documentation_link,
        )
        .finish()
}

fn compare_schemas(
    old: &Document,
    new: &Document,
    options: &DiffOptions,
) -> Result<Vec<DiffEntry>> {
    reconcile(
        "Schemas",
        &index_map(&old.schemas),
        &index_map(&new.schemas),
        options,
    )
}

fn compare_resources(
    old: &Document,
    new: &Document,
    options: &DiffOptions,
) -> Result<Vec<DiffEntry>> {
    let old_resources = index_by_name("Resources", &old.resources, |r| r.name.as_str())?;
    let new_resources = index_by_name("Resources", &new.resources, |r| r.name.as_str())?;
    reconcile("Resources", &old_resources, &new_resources, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::{ChangeType, ElementKind};
    use crate::errors::DiffError;
    use crate::model::Method;

    fn doc(name: &str) -> Document {
        Document {
            id: format!("{}:v1", name),
            name: name.to_string(),
            version: "v1".to_string(),
            revision: "20161109".to_string(),
            title: "Test API".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_identifiers_compared_with_every_flag_off() {
        let diffs = compare_documents(
            &doc("storage"),
            &doc("storage2"),
            &DiffOptions::identifiers_only(),
        )
        .unwrap();
        let ids: Vec<_> = diffs.iter().map(|d| d.element_id.as_str()).collect();
        assert_eq!(ids, vec!["ID", "Name"]);
    }

    #[test]
    fn test_versioning_gated() {
        let old = doc("storage");
        let new = Document {
            revision: "20191101".to_string(),
            ..old.clone()
        };
        assert!(
            compare_documents(&old, &new, &DiffOptions::all().with_versioning(false))
                .unwrap()
                .is_empty()
        );
        let diffs = compare_documents(&old, &new, &DiffOptions::all()).unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].element_kind, ElementKind::StringField);
        assert_eq!(diffs[0].change_type, ChangeType::Modify);
    }

    #[test]
    fn test_service_metadata_gated() {
        let old = doc("storage");
        let new = Document {
            root_url: "https://example.googleapis.com/".to_string(),
            ..old.clone()
        };
        assert!(
            compare_documents(&old, &new, &DiffOptions::identifiers_only())
                .unwrap()
                .is_empty()
        );
        let diffs = compare_documents(
            &old,
            &new,
            &DiffOptions::identifiers_only().with_service(true),
        )
        .unwrap();
        assert_eq!(diffs[0].element_id, "RootURL");
    }

    fn resource_with_methods(name: &str, methods: &[&str]) -> Resource {
        Resource {
            name: name.to_string(),
            methods: methods
                .iter()
                .map(|m| Method {
                    name: m.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicate_under_deleted_resource_fails() {
        let old = Document {
            resources: vec![resource_with_methods("legacy", &["get", "get"])],
            ..doc("storage")
        };
        let new = doc("storage");
        let err = compare_documents(&old, &new, &DiffOptions::all()).unwrap_err();
        assert_eq!(
            err,
            DiffError::DuplicateKey {
                collection: "Resources.legacy.Methods".to_string(),
                key: "get".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_under_added_nested_resource_fails() {
        let old = doc("storage");
        let new = Document {
            resources: vec![Resource {
                name: "projects".to_string(),
                resources: vec![
                    resource_with_methods("hmacKeys", &[]),
                    resource_with_methods("hmacKeys", &[]),
                ],
                ..Default::default()
            }],
            ..doc("storage")
        };
        let err = compare_documents(&old, &new, &DiffOptions::all()).unwrap_err();
        assert_eq!(
            err,
            DiffError::DuplicateKey {
                collection: "Resources.projects.Resources".to_string(),
                key: "hmacKeys".to_string(),
            }
        );
    }
}
