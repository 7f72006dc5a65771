use std::collections::BTreeMap;

/// A type schema declared by a discovery document.
///
/// The reconciliation identity of a schema is its key in
/// [`Document::schemas`](super::Document::schemas); `name` is a plain field
/// that the loader fills from that key for top-level schemas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub id: String,
    pub name: String,
    /// JSON type, e.g. `object`, `string`, `array`
    pub schema_type: String,
    pub format: String,
    pub description: String,
    /// Target of a `$ref`, e.g. `Bucket`
    pub reference: String,
    pub default: String,
    pub pattern: String,

    // Structured sub-fields. Parsed but never compared.
    pub items: Option<Box<Schema>>,
    pub additional_properties: Option<Box<Schema>>,
    pub properties: BTreeMap<String, Schema>,
    pub enums: Vec<String>,
    pub enum_descriptions: Vec<String>,
}
