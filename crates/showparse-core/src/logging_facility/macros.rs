//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use showparse_core::log_op_start;
/// log_op_start!("parse_lines");
/// log_op_start!("parse_lines", kind = "route-entry");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = showparse_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = showparse_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use showparse_core::log_op_end;
/// log_op_end!("parse_lines", records = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = showparse_core_types::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = showparse_core_types::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation that failed with a [`ScrapeError`](crate::errors::ScrapeError)
///
/// # Example
///
/// ```
/// # use showparse_core::log_op_error;
/// # use showparse_core::errors::ScrapeError;
/// # use showparse_core_types::RecordKind;
/// let err = ScrapeError::EmptyInput {
///     kind: RecordKind::RouteEntry,
///     lines_total: 0,
///     skipped: 0,
/// };
/// log_op_error!("parse_lines", &err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = showparse_core_types::schema::EVENT_END_ERROR,
            err.code = $err.code(),
            "{}",
            $err
        );
    };
}
