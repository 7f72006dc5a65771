//! Structured logging for discodiff
//!
//! `compare_documents` and `load_document` are the only operations that emit
//! lifecycle events (`start`, then `end` or `end_error`) through the macros
//! in [`macros`]. Reconciliation and parsing below them log at debug level
//! only. Field names come from [`crate::core_types::schema`].
//!
//! Binaries call [`init`] once with a [`Profile`]; tests call
//! [`init_test_capture`] instead and assert on the recorded events.
//!
//! ```rust
//! use discodiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
