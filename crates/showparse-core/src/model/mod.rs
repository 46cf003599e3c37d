//! Typed record models
//!
//! One struct per supported command-output kind, plus the [`Record`] sum
//! type the snapshot and diff layers operate on. Records are immutable
//! value objects: either fully well-typed or never built — a field that
//! fails coercion aborts the whole record with a
//! [`MalformedField`](crate::errors::ScrapeError::MalformedField) error.

pub mod interface_detail;
pub mod interface_status;
pub mod log_entry;
pub mod neighbor;
pub mod route;

pub use interface_detail::InterfaceDetailRecord;
pub use interface_status::{DuplexMode, InterfaceStatusRecord, PortStatus, VlanAssignment};
pub use log_entry::LogEntryRecord;
pub use neighbor::NeighborRecord;
pub use route::RouteEntryRecord;

use crate::errors::{Result, ScrapeError};
use crate::extract::FieldMap;
use serde::Serialize;
use showparse_core_types::RecordKind;

/// A typed record of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    InterfaceStatus(InterfaceStatusRecord),
    CdpNeighbor(NeighborRecord),
    LogEntry(LogEntryRecord),
    InterfaceDetail(InterfaceDetailRecord),
    RouteEntry(RouteEntryRecord),
}

impl Record {
    /// Build a typed record of `kind` from an extracted field map.
    ///
    /// `ordinal` is the source line of the block, carried into any
    /// coercion error for diagnostics.
    pub fn from_fields(kind: RecordKind, fields: &FieldMap, ordinal: usize) -> Result<Record> {
        match kind {
            RecordKind::InterfaceStatus => {
                InterfaceStatusRecord::from_fields(fields, ordinal).map(Record::InterfaceStatus)
            }
            RecordKind::CdpNeighbor => {
                NeighborRecord::from_fields(fields, ordinal).map(Record::CdpNeighbor)
            }
            RecordKind::LogEntry => {
                LogEntryRecord::from_fields(fields, ordinal).map(Record::LogEntry)
            }
            RecordKind::InterfaceDetail => {
                InterfaceDetailRecord::from_fields(fields, ordinal).map(Record::InterfaceDetail)
            }
            RecordKind::RouteEntry => {
                RouteEntryRecord::from_fields(fields, ordinal).map(Record::RouteEntry)
            }
        }
    }

    /// Which kind this record is.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::InterfaceStatus(_) => RecordKind::InterfaceStatus,
            Record::CdpNeighbor(_) => RecordKind::CdpNeighbor,
            Record::LogEntry(_) => RecordKind::LogEntry,
            Record::InterfaceDetail(_) => RecordKind::InterfaceDetail,
            Record::RouteEntry(_) => RecordKind::RouteEntry,
        }
    }

    /// The identity key used to match this record across two snapshots.
    ///
    /// Volatile fields (neighbor holdtime, rates, counters) are excluded
    /// so that re-captures of an unchanged device diff as unchanged.
    pub fn identity_key(&self) -> String {
        match self {
            Record::InterfaceStatus(r) => r.identity_key(),
            Record::CdpNeighbor(r) => r.identity_key(),
            Record::LogEntry(r) => r.identity_key(),
            Record::InterfaceDetail(r) => r.identity_key(),
            Record::RouteEntry(r) => r.identity_key(),
        }
    }

    /// Field values in schema column order, as rendered by the sinks.
    pub fn field_row(&self) -> Vec<String> {
        match self {
            Record::InterfaceStatus(r) => r.field_row(),
            Record::CdpNeighbor(r) => r.field_row(),
            Record::LogEntry(r) => r.field_row(),
            Record::InterfaceDetail(r) => r.field_row(),
            Record::RouteEntry(r) => r.field_row(),
        }
    }
}

/// Fetch a raw field value, defaulting to the empty string.
///
/// Extraction strategies guarantee every schema key is present, so the
/// default only covers hand-built maps in tests.
pub(crate) fn raw<'a>(fields: &'a FieldMap, key: &'static str) -> &'a str {
    fields.get(key).map(String::as_str).unwrap_or("")
}

/// Coerce a declared-numeric field, stripping thousands separators.
pub(crate) fn parse_num<T>(
    kind: RecordKind,
    fields: &FieldMap,
    key: &'static str,
    ordinal: usize,
) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = raw(fields, key);
    value
        .replace(',', "")
        .parse()
        .map_err(|e: T::Err| ScrapeError::MalformedField {
            kind,
            field: key,
            value: value.to_string(),
            ordinal,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_num_strips_thousands_separators() {
        let mut fields = FieldMap::new();
        fields.insert("bytes", "3,949,235,653,296".to_string());
        let n: u64 = parse_num(RecordKind::InterfaceDetail, &fields, "bytes", 1).unwrap();
        assert_eq!(n, 3_949_235_653_296);
    }

    #[test]
    fn test_parse_num_reports_field_and_value() {
        let mut fields = FieldMap::new();
        fields.insert("holdtime", "14x".to_string());
        let err = parse_num::<u32>(RecordKind::CdpNeighbor, &fields, "holdtime", 7).unwrap_err();
        match err {
            ScrapeError::MalformedField {
                field,
                value,
                ordinal,
                ..
            } => {
                assert_eq!(field, "holdtime");
                assert_eq!(value, "14x");
                assert_eq!(ordinal, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
