/// A resource in the discovery resource hierarchy.
///
/// Resources nest recursively. There is no stable id other than `name`, which
/// must be unique among siblings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    pub name: String,
    pub resources: Vec<Resource>,
    pub methods: Vec<Method>,
}

/// An RPC method exposed by a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Method {
    /// Method name, unique within the owning resource (e.g. `list`)
    pub name: String,
    /// Fully qualified id (e.g. `storage.buckets.list`)
    pub id: String,
    pub path: String,
    /// HTTP verb, e.g. `GET`
    pub http_method: String,
    pub description: String,
    pub supports_media_download: bool,

    // Not compared.
    pub parameters: Vec<Parameter>,
    pub parameter_order: Vec<String>,
    /// `$ref` of the request body schema, if any
    pub request: Option<String>,
    /// `$ref` of the response schema, if any
    pub response: Option<String>,
    pub scopes: Vec<String>,
    pub media_upload: Option<MediaUpload>,
}

/// A method parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: String,
    /// `path` or `query`
    pub location: String,
    pub required: bool,
    pub repeated: bool,
    pub description: String,
    pub format: String,
    pub pattern: String,
    pub default: String,
}

/// Media upload capabilities of a method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaUpload {
    /// Accepted MIME ranges, e.g. `*/*`
    pub accept: Vec<String>,
    /// Maximum upload size, e.g. `5TB`
    pub max_size: String,
}
