use showparse_core_types::RecordKind;
use thiserror::Error;

/// Result type alias using ScrapeError
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Error taxonomy for extraction and diff operations.
///
/// Only *hard* failures appear here. Soft failures (a line or block that
/// matches no known shape) are counted in [`crate::pipeline::RunStats`]
/// and never surface as an `Err` — the run continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrapeError {
    /// A matched block produced a field value that cannot be coerced to
    /// its declared type. The offending block is dropped; the run continues.
    #[error("malformed field `{field}` in {kind} record near line {ordinal}: cannot parse {value:?}: {reason}")]
    MalformedField {
        kind: RecordKind,
        field: &'static str,
        value: String,
        ordinal: usize,
        reason: String,
    },

    /// The input was empty, or no line produced a complete record.
    #[error("no {kind} records found in input ({lines_total} lines scanned, {skipped} skipped)")]
    EmptyInput {
        kind: RecordKind,
        lines_total: usize,
        skipped: usize,
    },

    /// The diff engine was invoked with snapshots of two different kinds.
    #[error("snapshot kinds differ: left is {left}, right is {right}")]
    SchemaMismatch { left: RecordKind, right: RecordKind },

    /// An observed header row lists its columns in a different order than
    /// the declared schema. Slicing at the learned offsets would silently
    /// misalign every field, so this aborts the run.
    #[error("header column order mismatch at line {ordinal}: column `{column}` not found where expected (header: {header:?})")]
    ColumnOrderMismatch {
        column: &'static str,
        ordinal: usize,
        header: String,
    },

    /// A `--where` style predicate could not be parsed or names an
    /// unknown field for the record kind.
    #[error("invalid filter expression `{expr}`: {reason}")]
    InvalidFilter { expr: String, reason: String },
}

impl ScrapeError {
    /// Stable error code for programmatic handling and log assertions.
    pub fn code(&self) -> &'static str {
        match self {
            ScrapeError::MalformedField { .. } => "ERR_MALFORMED_FIELD",
            ScrapeError::EmptyInput { .. } => "ERR_EMPTY_INPUT",
            ScrapeError::SchemaMismatch { .. } => "ERR_SCHEMA_MISMATCH",
            ScrapeError::ColumnOrderMismatch { .. } => "ERR_COLUMN_ORDER_MISMATCH",
            ScrapeError::InvalidFilter { .. } => "ERR_INVALID_FILTER",
        }
    }
}
