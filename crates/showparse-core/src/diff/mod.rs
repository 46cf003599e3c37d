//! Snapshot diff engine.
//!
//! Compares two snapshots of the same record kind and classifies every
//! record as added, removed, or common by identity key.
//!
//! ## Entry point
//!
//! ```ignore
//! use showparse_core::diff::compute_diff;
//!
//! let diff = compute_diff(&before, &after)?;
//! let summary = showparse_core::diff::render_diff_summary(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diffs.
//! - **Order preservation**: `removed` and `added` keep each record's
//!   original order within its source snapshot.
//! - **Volatile-field suppression**: identity keys exclude fields that
//!   change between captures of an unchanged device (holdtime, rates,
//!   counters), so re-captures diff as unchanged.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::compute_diff;
pub use human_summary::render_diff_summary;
pub use model::RecordDiff;
