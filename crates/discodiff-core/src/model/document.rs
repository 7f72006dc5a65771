use std::collections::BTreeMap;

use super::resource::Resource;
use super::schema::Schema;

/// A parsed discovery document.
///
/// One old and one new instance are supplied per comparison. Schemas are
/// keyed by name; resources form an ordered sequence whose identity is each
/// resource's `name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Opaque identifier, e.g. `storage:v1`
    pub id: String,

    /// API name, e.g. `storage`
    pub name: String,

    /// API version label, e.g. `v1`
    pub version: String,

    /// Revision stamp of this snapshot, e.g. `20191101`
    pub revision: String,

    pub title: String,

    pub description: String,

    /// Discovery format version (normally `v1`)
    pub discovery_version: String,

    pub root_url: String,

    pub service_path: String,

    pub base_path: String,

    pub documentation_link: String,

    /// Schemas keyed by their name in the document
    pub schemas: BTreeMap<String, Schema>,

    /// Top-level resources, in document order
    pub resources: Vec<Resource>,
}
