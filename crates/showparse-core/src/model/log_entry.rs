//! `show logging` records.

use serde::Serialize;
use showparse_core_types::schema::log_entry as f;
use showparse_core_types::RecordKind;

use crate::errors::{Result, ScrapeError};
use crate::extract::FieldMap;
use crate::model::{parse_num, raw};

/// One syslog line, e.g.
/// `Sep  5 22:56:48.497: %LINK-SW1-3-UPDOWN: Interface Te1/3/11, changed state to down`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntryRecord {
    /// Device-local timestamp, kept verbatim (the format depends on the
    /// device's logging configuration and carries no year)
    pub date: String,

    /// Facility token, including any switch/stack qualifier (`LINK-SW1`)
    pub facility: String,

    /// Syslog severity, 0 (emergencies) through 7 (debugging)
    pub severity: u8,

    /// Message mnemonic (`UPDOWN`)
    pub mnemonic: String,

    /// Free-form message text
    pub description: String,
}

impl LogEntryRecord {
    pub fn from_fields(fields: &FieldMap, ordinal: usize) -> Result<LogEntryRecord> {
        let severity: u8 = parse_num(RecordKind::LogEntry, fields, f::SEVERITY, ordinal)?;
        if severity > 7 {
            return Err(ScrapeError::MalformedField {
                kind: RecordKind::LogEntry,
                field: f::SEVERITY,
                value: severity.to_string(),
                ordinal,
                reason: "syslog severity is 0..=7".to_string(),
            });
        }
        Ok(LogEntryRecord {
            date: raw(fields, f::DATE).to_string(),
            facility: raw(fields, f::FACILITY).to_string(),
            severity,
            mnemonic: raw(fields, f::MNEMONIC).to_string(),
            description: raw(fields, f::DESCRIPTION).to_string(),
        })
    }

    /// Log lines have no stable identifier; the whole entry is the key.
    pub fn identity_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.date, self.facility, self.severity, self.mnemonic, self.description
        )
    }

    pub fn field_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.facility.clone(),
            self.severity.to_string(),
            self.mnemonic.clone(),
            self.description.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_out_of_range_is_malformed() {
        let mut fields = FieldMap::new();
        fields.insert(f::SEVERITY, "8".to_string());
        let err = LogEntryRecord::from_fields(&fields, 4).unwrap_err();
        match err {
            ScrapeError::MalformedField { field, value, .. } => {
                assert_eq!(field, f::SEVERITY);
                assert_eq!(value, "8");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
