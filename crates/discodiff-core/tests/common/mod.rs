use discodiff_core::model::{Document, Method, Resource, Schema};
use discodiff_core::parse_document;
use std::path::PathBuf;

/// Path to a file under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load and parse a fixture document
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Document {
    let bytes = std::fs::read(fixture_path(name)).unwrap();
    parse_document(&bytes).unwrap()
}

/// A small document with identifiers, versioning and service metadata set
#[allow(dead_code)]
pub fn base_document() -> Document {
    Document {
        id: "storage:v1".to_string(),
        name: "storage".to_string(),
        version: "v1".to_string(),
        revision: "20161109".to_string(),
        title: "Cloud Storage JSON API".to_string(),
        root_url: "https://www.googleapis.com/".to_string(),
        service_path: "storage/v1/".to_string(),
        base_path: "/storage/v1/".to_string(),
        documentation_link: "https://developers.google.com/storage/docs/json_api/".to_string(),
        ..Default::default()
    }
}

/// A schema with `id`, `name` and `type` set
#[allow(dead_code)]
pub fn schema(name: &str, schema_type: &str) -> Schema {
    Schema {
        id: name.to_string(),
        name: name.to_string(),
        schema_type: schema_type.to_string(),
        ..Default::default()
    }
}

/// A method with name, id, path and verb set
#[allow(dead_code)]
pub fn method(name: &str, id: &str, path: &str, verb: &str) -> Method {
    Method {
        name: name.to_string(),
        id: id.to_string(),
        path: path.to_string(),
        http_method: verb.to_string(),
        ..Default::default()
    }
}

/// A resource with the given methods and nested resources
#[allow(dead_code)]
pub fn resource(name: &str, resources: Vec<Resource>, methods: Vec<Method>) -> Resource {
    Resource {
        name: name.to_string(),
        resources,
        methods,
    }
}
