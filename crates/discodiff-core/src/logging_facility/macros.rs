//! Lifecycle logging macros
//!
//! Every public operation brackets its work with exactly one start event and
//! exactly one terminal event (`end` or `end_error`). The `component` field
//! is the calling module's path.

/// Emit the `start` event of an operation
///
/// ```
/// # use discodiff_core::log_op_start;
/// log_op_start!("compare_documents");
/// log_op_start!("compare_documents", old_doc = "storage:v1", new_doc = "storage:v2");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START
            $(, $($field)+)?
        )
    };
}

/// Emit the `end` event of an operation; `duration_ms` is mandatory
///
/// ```
/// # use discodiff_core::log_op_end;
/// log_op_end!("compare_documents", duration_ms = 3, entry_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Emit the `end_error` event of an operation
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind and stable code are attached as `err.kind` and `err.code`.
///
/// ```
/// # use discodiff_core::{log_op_error, errors::DiffError};
/// let err = DiffError::InvalidDocument { reason: "not JSON".to_string() };
/// log_op_error!("load_document", err, duration_ms = 1, path = "doc.json");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex.kind(),
            err.code = ex.code()
            $(, $($field)+)?
        )
    }};
}
