//! Diff output types.

use crate::model::Record;
use serde::Serialize;
use showparse_core_types::RecordKind;

/// The classification of two snapshots' records by identity key.
///
/// Invariants, with `a` the first snapshot and `b` the second:
/// `removed.len() + common_count` equals the number of distinct identity
/// keys in `a`, `added.len() + common_count` equals the number of
/// distinct identity keys in `b`, and no record in `removed`/`added` has
/// an identity-key match on the other side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDiff {
    /// Kind of both input snapshots
    pub kind: RecordKind,

    /// Records of snapshot 1 with no identity match in snapshot 2,
    /// in snapshot-1 source order
    pub removed: Vec<Record>,

    /// Records of snapshot 2 with no identity match in snapshot 1,
    /// in snapshot-2 source order
    pub added: Vec<Record>,

    /// Number of identity keys present in both snapshots
    pub common_count: usize,
}

impl RecordDiff {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    /// True if both sides matched completely.
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}
