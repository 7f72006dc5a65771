//! Discovery document loader.
//!
//! Parses discovery JSON into the [`Document`] model. In the wire format,
//! schemas, resources, methods and parameters are all JSON objects keyed by
//! name; the loader copies each key into the element's `name` and emits
//! resource, method and parameter sequences in key order.
//!
//! Unknown JSON fields are ignored and missing ones default to empty, so
//! partial documents load as long as every present field has the right type.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{DiffError, Result};
use crate::model::{Document, MediaUpload, Method, Parameter, Resource, Schema};
use crate::{log_op_end, log_op_error, log_op_start};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawDocument {
    id: String,
    name: String,
    version: String,
    revision: String,
    title: String,
    description: String,
    discovery_version: String,
    root_url: String,
    service_path: String,
    base_path: String,
    documentation_link: String,
    schemas: BTreeMap<String, RawSchema>,
    resources: BTreeMap<String, RawResource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSchema {
    id: String,
    #[serde(rename = "type")]
    schema_type: String,
    format: String,
    description: String,
    #[serde(rename = "$ref")]
    reference: String,
    default: String,
    pattern: String,
    items: Option<Box<RawSchema>>,
    additional_properties: Option<Box<RawSchema>>,
    properties: BTreeMap<String, RawSchema>,
    #[serde(rename = "enum")]
    enums: Vec<String>,
    enum_descriptions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResource {
    resources: BTreeMap<String, RawResource>,
    methods: BTreeMap<String, RawMethod>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawMethod {
    id: String,
    path: String,
    http_method: String,
    description: String,
    supports_media_download: bool,
    parameters: BTreeMap<String, RawParameter>,
    parameter_order: Vec<String>,
    request: Option<RawRef>,
    response: Option<RawRef>,
    scopes: Vec<String>,
    media_upload: Option<RawMediaUpload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawParameter {
    #[serde(rename = "type")]
    param_type: String,
    location: String,
    required: bool,
    repeated: bool,
    description: String,
    format: String,
    pattern: String,
    default: String,
}

#[derive(Debug, Deserialize)]
struct RawRef {
    #[serde(rename = "$ref")]
    reference: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawMediaUpload {
    accept: Vec<String>,
    max_size: String,
}

fn build_schema(name: String, raw: RawSchema) -> Schema {
    Schema {
        id: raw.id,
        name,
        schema_type: raw.schema_type,
        format: raw.format,
        description: raw.description,
        reference: raw.reference,
        default: raw.default,
        pattern: raw.pattern,
        items: raw.items.map(|s| Box::new(build_schema(String::new(), *s))),
        additional_properties: raw
            .additional_properties
            .map(|s| Box::new(build_schema(String::new(), *s))),
        properties: raw
            .properties
            .into_iter()
            .map(|(k, v)| (k.clone(), build_schema(k, v)))
            .collect(),
        enums: raw.enums,
        enum_descriptions: raw.enum_descriptions,
    }
}

fn build_resource(name: String, raw: RawResource) -> Resource {
    Resource {
        name,
        resources: raw
            .resources
            .into_iter()
            .map(|(k, v)| build_resource(k, v))
            .collect(),
        methods: raw
            .methods
            .into_iter()
            .map(|(k, v)| build_method(k, v))
            .collect(),
    }
}

fn build_method(name: String, raw: RawMethod) -> Method {
    Method {
        name,
        id: raw.id,
        path: raw.path,
        http_method: raw.http_method,
        description: raw.description,
        supports_media_download: raw.supports_media_download,
        parameters: raw
            .parameters
            .into_iter()
            .map(|(k, p)| Parameter {
                name: k,
                param_type: p.param_type,
                location: p.location,
                required: p.required,
                repeated: p.repeated,
                description: p.description,
                format: p.format,
                pattern: p.pattern,
                default: p.default,
            })
            .collect(),
        parameter_order: raw.parameter_order,
        request: raw.request.map(|r| r.reference),
        response: raw.response.map(|r| r.reference),
        scopes: raw.scopes,
        media_upload: raw.media_upload.map(|m| MediaUpload {
            accept: m.accept,
            max_size: m.max_size,
        }),
    }
}

/// Parse discovery JSON bytes into a [`Document`].
///
/// # Errors
///
/// - `InvalidDocument`: bytes are not valid JSON, the root is not an object,
///   or a present field has the wrong type
pub fn parse_document(bytes: &[u8]) -> Result<Document> {
    let raw: RawDocument =
        serde_json::from_slice(bytes).map_err(|e| DiffError::InvalidDocument {
            reason: format!("not a valid discovery document: {}", e),
        })?;

    let doc = Document {
        id: raw.id,
        name: raw.name,
        version: raw.version,
        revision: raw.revision,
        title: raw.title,
        description: raw.description,
        discovery_version: raw.discovery_version,
        root_url: raw.root_url,
        service_path: raw.service_path,
        base_path: raw.base_path,
        documentation_link: raw.documentation_link,
        schemas: raw
            .schemas
            .into_iter()
            .map(|(k, v)| (k.clone(), build_schema(k, v)))
            .collect(),
        resources: raw
            .resources
            .into_iter()
            .map(|(k, v)| build_resource(k, v))
            .collect(),
    };

    tracing::debug!(
        doc_id = doc.id.as_str(),
        schemas = doc.schemas.len(),
        resources = doc.resources.len(),
        "parsed discovery document"
    );
    Ok(doc)
}

/// Read and parse a discovery document from disk.
///
/// # Errors
///
/// - `Io`: the file cannot be read
/// - `InvalidDocument`: see [`parse_document`]
pub fn load_document(path: &Path) -> Result<Document> {
    log_op_start!("load_document", path = %path.display());
    let start = std::time::Instant::now();

    let result = std::fs::read(path)
        .map_err(|e| DiffError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
        .and_then(|bytes| parse_document(&bytes));

    match result {
        Ok(doc) => {
            log_op_end!(
                "load_document",
                duration_ms = start.elapsed().as_millis() as u64,
                schema_count = doc.schemas.len() as u64,
                resource_count = doc.resources.len() as u64
            );
            Ok(doc)
        }
        Err(e) => {
            log_op_error!(
                "load_document",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_become_names_and_sequences_are_sorted() {
        let json = br#"{
            "id": "storage:v1",
            "schemas": {"Bucket": {"id": "Bucket", "type": "object"}},
            "resources": {
                "objects": {"methods": {"list": {"id": "storage.objects.list"}}},
                "buckets": {"methods": {"get": {}, "delete": {}}}
            }
        }"#;
        let doc = parse_document(json).unwrap();
        assert_eq!(doc.schemas["Bucket"].name, "Bucket");
        assert_eq!(doc.schemas["Bucket"].schema_type, "object");
        let names: Vec<_> = doc.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["buckets", "objects"]);
        let methods: Vec<_> = doc.resources[0]
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(methods, vec!["delete", "get"]);
    }

    #[test]
    fn test_refs_and_media_fields() {
        let json = br#"{"resources": {"objects": {"methods": {"insert": {
            "httpMethod": "POST",
            "supportsMediaDownload": true,
            "request": {"$ref": "Object"},
            "response": {"$ref": "Object"},
            "mediaUpload": {"accept": ["*/*"], "maxSize": "5TB"},
            "parameters": {"bucket": {"type": "string", "location": "path", "required": true}}
        }}}}}"#;
        let doc = parse_document(json).unwrap();
        let m = &doc.resources[0].methods[0];
        assert_eq!(m.http_method, "POST");
        assert!(m.supports_media_download);
        assert_eq!(m.request.as_deref(), Some("Object"));
        assert_eq!(m.media_upload.as_ref().unwrap().max_size, "5TB");
        assert_eq!(m.parameters[0].name, "bucket");
        assert!(m.parameters[0].required);
    }

    #[test]
    fn test_not_json_is_invalid_document() {
        let err = parse_document(b"not json").unwrap_err();
        assert!(matches!(err, DiffError::InvalidDocument { .. }));
    }

    #[test]
    fn test_wrong_field_type_is_invalid_document() {
        let err = parse_document(br#"{"revision": 20191101}"#).unwrap_err();
        assert!(matches!(err, DiffError::InvalidDocument { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/discodiff/doc.json")).unwrap_err();
        assert!(matches!(err, DiffError::Io { .. }));
    }
}
