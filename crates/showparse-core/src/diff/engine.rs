//! Diff computation.

use crate::diff::model::RecordDiff;
use crate::errors::{Result, ScrapeError};
use crate::snapshot::Snapshot;
use std::collections::BTreeMap;

/// Map identity key to the index of its *last* occurrence.
///
/// A duplicate key within one snapshot is legal: the later record in
/// source order silently supersedes the earlier one for diff purposes.
fn key_map(snapshot: &Snapshot) -> BTreeMap<String, usize> {
    let mut map = BTreeMap::new();
    for (index, record) in snapshot.iter().enumerate() {
        map.insert(record.identity_key(), index);
    }
    map
}

/// Compute the added/removed/common classification of two snapshots.
///
/// # Errors
///
/// - `SchemaMismatch` — the snapshots' declared kinds differ; the diff
///   aborts before any classification occurs.
pub fn compute_diff(a: &Snapshot, b: &Snapshot) -> Result<RecordDiff> {
    if a.kind() != b.kind() {
        return Err(ScrapeError::SchemaMismatch {
            left: a.kind(),
            right: b.kind(),
        });
    }

    let a_keys = key_map(a);
    let b_keys = key_map(b);

    // Walk each snapshot in source order, keeping only the superseding
    // occurrence of a duplicated key.
    let removed: Vec<_> = a
        .iter()
        .enumerate()
        .filter(|(index, record)| {
            let key = record.identity_key();
            a_keys.get(&key) == Some(index) && !b_keys.contains_key(&key)
        })
        .map(|(_, record)| record.clone())
        .collect();

    let added: Vec<_> = b
        .iter()
        .enumerate()
        .filter(|(index, record)| {
            let key = record.identity_key();
            b_keys.get(&key) == Some(index) && !a_keys.contains_key(&key)
        })
        .map(|(_, record)| record.clone())
        .collect();

    let common_count = a_keys.keys().filter(|k| b_keys.contains_key(*k)).count();

    Ok(RecordDiff {
        kind: a.kind(),
        removed,
        added,
        common_count,
    })
}
