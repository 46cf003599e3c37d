//! `show cdp neighbors` records.

use serde::Serialize;
use showparse_core_types::schema::cdp_neighbor as f;
use showparse_core_types::RecordKind;

use crate::errors::Result;
use crate::extract::FieldMap;
use crate::model::{parse_num, raw};

/// One neighbor of `show cdp neighbors`, whether it was printed on one
/// line or split across an identifier line and a continuation line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborRecord {
    /// Advertised hostname of the neighbor
    pub device_id: String,

    /// Local interface the neighbor was heard on
    pub local_interface: String,

    /// Seconds until the entry expires
    pub holdtime: u32,

    /// Capability letter codes (`R`, `T`, `S`, `I`, …), decomposed from
    /// the capability column
    pub capabilities: Vec<String>,

    /// Neighbor hardware platform (`WS-C3750X`)
    pub platform: String,

    /// The neighbor's own interface
    pub port_id: String,
}

impl NeighborRecord {
    pub fn from_fields(fields: &FieldMap, ordinal: usize) -> Result<NeighborRecord> {
        Ok(NeighborRecord {
            device_id: raw(fields, f::DEVICE_ID).to_string(),
            local_interface: raw(fields, f::LOCAL_INTERFACE).to_string(),
            holdtime: parse_num(RecordKind::CdpNeighbor, fields, f::HOLDTIME, ordinal)?,
            capabilities: raw(fields, f::CAPABILITY)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            platform: raw(fields, f::PLATFORM).to_string(),
            port_id: raw(fields, f::PORT_ID).to_string(),
        })
    }

    /// Capability codes re-joined the way the device prints them.
    pub fn capability(&self) -> String {
        self.capabilities.join(" ")
    }

    /// Identity excludes the holdtime, which counts down between
    /// captures of an otherwise unchanged adjacency.
    pub fn identity_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.device_id, self.local_interface, self.port_id
        )
    }

    pub fn field_row(&self) -> Vec<String> {
        vec![
            self.device_id.clone(),
            self.local_interface.clone(),
            self.holdtime.to_string(),
            self.capability(),
            self.platform.clone(),
            self.port_id.clone(),
        ]
    }
}
