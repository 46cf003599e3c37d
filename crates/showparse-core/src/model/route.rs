//! `show ip route` records.

use serde::Serialize;
use showparse_core_types::schema::route_entry as f;
use showparse_core_types::RecordKind;

use crate::errors::{Result, ScrapeError};
use crate::extract::FieldMap;
use crate::model::raw;
use std::net::Ipv4Addr;

/// One route path. An ECMP destination yields one record per next-hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntryRecord {
    /// Protocol code column (`O`, `O E1`, `S`, `C`, …)
    pub protocol: String,

    /// Destination network address
    pub network: Ipv4Addr,

    /// Prefix length in bits
    pub prefix_len: u8,

    /// Next-hop address; `None` for directly connected routes
    pub next_hop: Option<Ipv4Addr>,

    /// Egress interface
    pub interface: String,
}

impl RouteEntryRecord {
    pub fn from_fields(fields: &FieldMap, ordinal: usize) -> Result<RouteEntryRecord> {
        let kind = RecordKind::RouteEntry;
        let malformed = |field: &'static str, value: &str, reason: String| {
            ScrapeError::MalformedField {
                kind,
                field,
                value: value.to_string(),
                ordinal,
                reason,
            }
        };

        // The extractor hands the destination as one composite token.
        let prefix = raw(fields, f::PREFIX);
        let (addr, len) = prefix
            .split_once('/')
            .ok_or_else(|| malformed(f::PREFIX, prefix, "expected network/length".to_string()))?;
        let network: Ipv4Addr = addr
            .parse()
            .map_err(|e: std::net::AddrParseError| malformed(f::PREFIX, prefix, e.to_string()))?;
        let prefix_len: u8 = len
            .parse()
            .map_err(|e: std::num::ParseIntError| malformed(f::PREFIX, prefix, e.to_string()))?;
        if prefix_len > 32 {
            return Err(malformed(
                f::PREFIX,
                prefix,
                "prefix length exceeds 32".to_string(),
            ));
        }

        let gw = raw(fields, f::NEXT_HOP);
        let next_hop = if gw.is_empty() {
            None
        } else {
            Some(
                gw.parse()
                    .map_err(|e: std::net::AddrParseError| malformed(f::NEXT_HOP, gw, e.to_string()))?,
            )
        };

        Ok(RouteEntryRecord {
            protocol: raw(fields, f::PROTOCOL).to_string(),
            network,
            prefix_len,
            next_hop,
            interface: raw(fields, f::INTERFACE).to_string(),
        })
    }

    /// Destination, next-hop, and egress interface; the protocol and any
    /// age/metric noise are not part of route identity.
    pub fn identity_key(&self) -> String {
        let gw = self
            .next_hop
            .map(|a| a.to_string())
            .unwrap_or_default();
        format!(
            "{}/{} via {} dev {}",
            self.network, self.prefix_len, gw, self.interface
        )
    }

    pub fn field_row(&self) -> Vec<String> {
        vec![
            self.protocol.clone(),
            self.network.to_string(),
            self.prefix_len.to_string(),
            self.next_hop.map(|a| a.to_string()).unwrap_or_default(),
            self.interface.clone(),
        ]
    }
}
