//! Snapshots: one captured set of records of a given kind.

use crate::errors::{Result, ScrapeError};
use crate::model::Record;
use serde::Serialize;
use showparse_core_types::RecordKind;

/// An ordered, kind-homogeneous sequence of records from one capture.
///
/// Order is the order records were encountered in the source; nothing
/// re-sorts a snapshot. The kind is fixed at construction and every
/// inserted record must match it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    kind: RecordKind,
    records: Vec<Record>,
}

impl Snapshot {
    /// An empty snapshot of the given kind.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    /// Build a snapshot from records already in source order.
    pub fn from_records(kind: RecordKind, records: Vec<Record>) -> Result<Self> {
        let mut snapshot = Self::new(kind);
        for record in records {
            snapshot.push(record)?;
        }
        Ok(snapshot)
    }

    /// Append a record, rejecting records of a foreign kind.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if record.kind() != self.kind {
            return Err(ScrapeError::SchemaMismatch {
                left: self.kind,
                right: record.kind(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}
