//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Document identifiers
pub const FIELD_OLD_DOC: &str = "old_doc";
pub const FIELD_NEW_DOC: &str = "new_doc";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_ENTRY_COUNT: &str = "entry_count";
pub const FIELD_SCHEMA_COUNT: &str = "schema_count";
pub const FIELD_RESOURCE_COUNT: &str = "resource_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
