//! Discovery document diff engine.
//!
//! Compares two parsed discovery documents and produces an ordered,
//! hierarchical changelist, plus a plain-text renderer for it.
//!
//! ## Entry point
//!
//! ```
//! use discodiff_core::diff::{compare_documents, render_diff, DiffOptions};
//! use discodiff_core::model::Document;
//!
//! let old = Document { revision: "20161109".into(), ..Default::default() };
//! let new = Document { revision: "20191101".into(), ..Default::default() };
//!
//! let diff = compare_documents(&old, &new, &DiffOptions::all())?;
//! assert_eq!(render_diff(&diff), "M .Revision [ \"20161109\" ==> \"20191101\" ]\n");
//! # Ok::<(), discodiff_core::errors::DiffError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: keyed collections are walked in sorted key order, so
//!   identical inputs produce identical trees.
//! - **Fixed category order**: identifiers, versioning, service metadata,
//!   schemas, resources.
//! - **Additions are whole subtrees**: every entry under an added element is
//!   itself an addition.
//! - **Deletions are opaque**: a deleted element's fields are not enumerated.
//! - **No renames**: a key change is one deletion plus one addition.

pub mod engine;
mod element;
pub mod field;
pub mod model;
pub mod options;
pub mod reconcile;
pub mod render;

pub use engine::compare_documents;
pub use model::{ChangeType, DiffEntry, ElementKind};
pub use options::DiffOptions;
pub use reconcile::amend_change_type;
pub use render::render_diff;
