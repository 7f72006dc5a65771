//! Per-entity comparators.
//!
//! Each comparator names the fields it compares explicitly and in a fixed
//! order. Fields that are not listed are deferred and never diffed; their
//! absence from the output is not a claim that they are equal.

use super::field::FieldDiffs;
use super::model::{DiffEntry, ElementKind};
use super::options::DiffOptions;
use super::reconcile::{index_by_name, reconcile, Element};
use crate::errors::Result;
use crate::model::{Method, Resource, Schema};

impl Element for Schema {
    const KIND: ElementKind = ElementKind::Schema;

    // Deferred: items, additional_properties, properties, enums, enum_descriptions.
    fn compare(_id: &str, old: &Self, new: &Self, options: &DiffOptions) -> Result<Vec<DiffEntry>> {
        Ok(FieldDiffs::new(options)
            .string("ID", &old.id, &new.id)
            .string("Type", &old.schema_type, &new.schema_type)
            .string("Format", &old.format, &new.format)
            .description(&old.description, &new.description)
            .string("Ref", &old.reference, &new.reference)
            .string("Default", &old.default, &new.default)
            .string("Pattern", &old.pattern, &new.pattern)
            .string("Name", &old.name, &new.name)
            .finish())
    }
}

impl Element for Resource {
    const KIND: ElementKind = ElementKind::Resource;

    fn compare(id: &str, old: &Self, new: &Self, options: &DiffOptions) -> Result<Vec<DiffEntry>> {
        let mut diffs = FieldDiffs::new(options)
            .string("Name", &old.name, &new.name)
            .finish();

        let prefix = format!("{}.Resources", id);
        let old_resources = index_by_name(&prefix, &old.resources, |r| r.name.as_str())?;
        let new_resources = index_by_name(&prefix, &new.resources, |r| r.name.as_str())?;
        diffs.extend(reconcile(&prefix, &old_resources, &new_resources, options)?);

        let prefix = format!("{}.Methods", id);
        let old_methods = index_by_name(&prefix, &old.methods, |m| m.name.as_str())?;
        let new_methods = index_by_name(&prefix, &new.methods, |m| m.name.as_str())?;
        diffs.extend(reconcile(&prefix, &old_methods, &new_methods, options)?);

        Ok(diffs)
    }
}

impl Element for Method {
    const KIND: ElementKind = ElementKind::Method;

    // Deferred: parameters, parameter_order, request, response, scopes, media_upload.
    fn compare(_id: &str, old: &Self, new: &Self, options: &DiffOptions) -> Result<Vec<DiffEntry>> {
        Ok(FieldDiffs::new(options)
            .string("Name", &old.name, &new.name)
            .string("ID", &old.id, &new.id)
            .string("Path", &old.path, &new.path)
            .string("HTTPMethod", &old.http_method, &new.http_method)
            .description(&old.description, &new.description)
            .boolean(
                "SupportsMediaDownload",
                old.supports_media_download,
                new.supports_media_download,
            )
            .finish())
    }
}
