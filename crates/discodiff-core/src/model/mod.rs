//! In-memory discovery document model.
//!
//! These types are plain read-only data: the loader builds them, the diff
//! engine only borrows them. Fields that the engine does not compare
//! (sub-schemas, parameters, scopes, ...) are still carried so that the model
//! is a faithful reading of the source document.

pub mod document;
pub mod resource;
pub mod schema;

pub use document::Document;
pub use resource::{MediaUpload, Method, Parameter, Resource};
pub use schema::Schema;
