//! Comparison category flags.

use serde::{Deserialize, Serialize};

/// Which comparison categories a diff runs.
///
/// Identifier comparison (`ID`, `Name`) always runs. Every flag gates exactly
/// one category and flags compose freely; none implies another. The
/// `Default` value enables nothing beyond identifiers.
///
/// Deserialization starts from [`DiffOptions::all`], so a config table only
/// needs to name the categories it turns off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "DiffOptions::all", deny_unknown_fields)]
pub struct DiffOptions {
    /// Compare `Version` and `Revision`
    pub versioning: bool,
    /// Compare description fields of schemas and methods
    pub descriptions: bool,
    /// Compare service metadata (title, URLs, paths, documentation link)
    pub service: bool,
    /// Reconcile the schema collection
    pub schemas: bool,
    /// Reconcile the resource hierarchy
    pub resources: bool,
}

impl DiffOptions {
    /// Every category enabled.
    pub const fn all() -> Self {
        Self {
            versioning: true,
            descriptions: true,
            service: true,
            schemas: true,
            resources: true,
        }
    }

    /// Only the always-on identifier comparison.
    pub const fn identifiers_only() -> Self {
        Self {
            versioning: false,
            descriptions: false,
            service: false,
            schemas: false,
            resources: false,
        }
    }

    pub const fn with_versioning(mut self, on: bool) -> Self {
        self.versioning = on;
        self
    }

    pub const fn with_descriptions(mut self, on: bool) -> Self {
        self.descriptions = on;
        self
    }

    pub const fn with_service(mut self, on: bool) -> Self {
        self.service = on;
        self
    }

    pub const fn with_schemas(mut self, on: bool) -> Self {
        self.schemas = on;
        self
    }

    pub const fn with_resources(mut self, on: bool) -> Self {
        self.resources = on;
        self
    }
}
