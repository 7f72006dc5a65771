//! discodiff core - semantic diffing of discovery documents
//!
//! This crate provides:
//! - The discovery document model (`Document`, `Schema`, `Resource`, `Method`)
//! - A loader from discovery JSON into that model
//! - The diff engine: keyed-collection reconciliation producing an ordered
//!   changelist, and a plain-text renderer for it
//! - The error and structured-logging facilities shared by the workspace

pub mod diff;
pub mod errors;
pub mod loader;
pub mod logging_facility;
pub mod model;

/// Re-exported so the logging macros resolve schema constants through `$crate`.
pub use discodiff_core_types as core_types;

// Re-export commonly used types
pub use diff::{compare_documents, render_diff, ChangeType, DiffEntry, DiffOptions, ElementKind};
pub use errors::{DiffError, ExError, ExErrorKind, Result};
pub use loader::{load_document, parse_document};
pub use model::{Document, Method, Resource, Schema};
