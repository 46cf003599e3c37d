//! `show interfaces` stanza records.

use serde::Serialize;
use showparse_core_types::schema::interface_detail as f;
use showparse_core_types::RecordKind;

use crate::errors::Result;
use crate::extract::FieldMap;
use crate::model::{parse_num, raw};

/// One interface stanza of `show interfaces`.
///
/// Counters that never appeared in the stanza (platforms vary in which
/// lines they print) are zero; label fields default to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceDetailRecord {
    /// Full interface name (`TenGigabitEthernet1/1/1`)
    pub name: String,

    /// Interface state (`up`, `down`, `administratively down`)
    pub status: String,

    /// Line protocol state, including any parenthesized qualifier
    pub line_protocol: String,

    pub description: String,

    /// Duplex label (`Full-duplex`)
    pub duplex: String,

    /// Speed label (`1000Mb`)
    pub speed: String,

    /// Media type (`1000BaseLH`)
    pub media_type: String,

    pub output_drops: u64,
    pub input_rate_bps: u64,
    pub input_rate_pps: u64,
    pub output_rate_bps: u64,
    pub output_rate_pps: u64,
    pub input_packets: u64,
    pub input_bytes: u64,
    pub input_errors: u64,
    pub crc: u64,
    pub output_packets: u64,
    pub output_bytes: u64,
    pub output_errors: u64,
}

impl InterfaceDetailRecord {
    pub fn from_fields(fields: &FieldMap, ordinal: usize) -> Result<InterfaceDetailRecord> {
        let kind = RecordKind::InterfaceDetail;
        Ok(InterfaceDetailRecord {
            name: raw(fields, f::NAME).to_string(),
            status: raw(fields, f::STATUS).to_string(),
            line_protocol: raw(fields, f::LINE_PROTOCOL).to_string(),
            description: raw(fields, f::DESCRIPTION).to_string(),
            duplex: raw(fields, f::DUPLEX).to_string(),
            speed: raw(fields, f::SPEED).to_string(),
            media_type: raw(fields, f::MEDIA_TYPE).to_string(),
            output_drops: parse_num(kind, fields, f::OUTPUT_DROPS, ordinal)?,
            input_rate_bps: parse_num(kind, fields, f::INPUT_RATE_BPS, ordinal)?,
            input_rate_pps: parse_num(kind, fields, f::INPUT_RATE_PPS, ordinal)?,
            output_rate_bps: parse_num(kind, fields, f::OUTPUT_RATE_BPS, ordinal)?,
            output_rate_pps: parse_num(kind, fields, f::OUTPUT_RATE_PPS, ordinal)?,
            input_packets: parse_num(kind, fields, f::INPUT_PACKETS, ordinal)?,
            input_bytes: parse_num(kind, fields, f::INPUT_BYTES, ordinal)?,
            input_errors: parse_num(kind, fields, f::INPUT_ERRORS, ordinal)?,
            crc: parse_num(kind, fields, f::CRC, ordinal)?,
            output_packets: parse_num(kind, fields, f::OUTPUT_PACKETS, ordinal)?,
            output_bytes: parse_num(kind, fields, f::OUTPUT_BYTES, ordinal)?,
            output_errors: parse_num(kind, fields, f::OUTPUT_ERRORS, ordinal)?,
        })
    }

    /// The interface name; counters and rates are volatile.
    pub fn identity_key(&self) -> String {
        self.name.clone()
    }

    pub fn field_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.status.clone(),
            self.line_protocol.clone(),
            self.description.clone(),
            self.duplex.clone(),
            self.speed.clone(),
            self.media_type.clone(),
            self.output_drops.to_string(),
            self.input_rate_bps.to_string(),
            self.input_rate_pps.to_string(),
            self.output_rate_bps.to_string(),
            self.output_rate_pps.to_string(),
            self.input_packets.to_string(),
            self.input_bytes.to_string(),
            self.input_errors.to_string(),
            self.crc.to_string(),
            self.output_packets.to_string(),
            self.output_bytes.to_string(),
            self.output_errors.to_string(),
        ]
    }
}
