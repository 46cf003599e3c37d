//! Canonical schema constants: per-kind column schemas and the field keys
//! used for structured logging and events.
//!
//! Column schemas double as the sink header row, so the names here are the
//! names that appear in delimited output files.

use crate::kind::RecordKind;

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_KIND: &str = "kind";
pub const FIELD_ORDINAL: &str = "ordinal";
pub const FIELD_RECORDS: &str = "records";
pub const FIELD_SKIPPED: &str = "skipped";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// `show interfaces status` columns.
pub mod interface_status {
    pub const PORT: &str = "Port";
    pub const NAME: &str = "Name";
    pub const STATUS: &str = "Status";
    pub const VLAN: &str = "Vlan";
    pub const DUPLEX: &str = "Duplex";
    pub const SPEED: &str = "Speed";
    pub const TYPE: &str = "Type";

    pub const COLUMNS: [&str; 7] = [PORT, NAME, STATUS, VLAN, DUPLEX, SPEED, TYPE];
}

/// `show cdp neighbors` columns.
pub mod cdp_neighbor {
    pub const DEVICE_ID: &str = "device_id";
    pub const LOCAL_INTERFACE: &str = "local_interface";
    pub const HOLDTIME: &str = "holdtime";
    pub const CAPABILITY: &str = "capability";
    pub const PLATFORM: &str = "platform";
    pub const PORT_ID: &str = "port_id";

    pub const COLUMNS: [&str; 6] = [
        DEVICE_ID,
        LOCAL_INTERFACE,
        HOLDTIME,
        CAPABILITY,
        PLATFORM,
        PORT_ID,
    ];
}

/// `show logging` columns.
pub mod log_entry {
    pub const DATE: &str = "date";
    pub const FACILITY: &str = "facility";
    pub const SEVERITY: &str = "severity";
    pub const MNEMONIC: &str = "mnemonic";
    pub const DESCRIPTION: &str = "description";

    pub const COLUMNS: [&str; 5] = [DATE, FACILITY, SEVERITY, MNEMONIC, DESCRIPTION];
}

/// `show interfaces` columns.
pub mod interface_detail {
    pub const NAME: &str = "name";
    pub const STATUS: &str = "status";
    pub const LINE_PROTOCOL: &str = "line_protocol";
    pub const DESCRIPTION: &str = "description";
    pub const DUPLEX: &str = "duplex";
    pub const SPEED: &str = "speed";
    pub const MEDIA_TYPE: &str = "media_type";
    pub const OUTPUT_DROPS: &str = "output_drops";
    pub const INPUT_RATE_BPS: &str = "input_rate_bps";
    pub const INPUT_RATE_PPS: &str = "input_rate_pps";
    pub const OUTPUT_RATE_BPS: &str = "output_rate_bps";
    pub const OUTPUT_RATE_PPS: &str = "output_rate_pps";
    pub const INPUT_PACKETS: &str = "input_packets";
    pub const INPUT_BYTES: &str = "input_bytes";
    pub const INPUT_ERRORS: &str = "input_errors";
    pub const CRC: &str = "crc";
    pub const OUTPUT_PACKETS: &str = "output_packets";
    pub const OUTPUT_BYTES: &str = "output_bytes";
    pub const OUTPUT_ERRORS: &str = "output_errors";

    pub const COLUMNS: [&str; 19] = [
        NAME,
        STATUS,
        LINE_PROTOCOL,
        DESCRIPTION,
        DUPLEX,
        SPEED,
        MEDIA_TYPE,
        OUTPUT_DROPS,
        INPUT_RATE_BPS,
        INPUT_RATE_PPS,
        OUTPUT_RATE_BPS,
        OUTPUT_RATE_PPS,
        INPUT_PACKETS,
        INPUT_BYTES,
        INPUT_ERRORS,
        CRC,
        OUTPUT_PACKETS,
        OUTPUT_BYTES,
        OUTPUT_ERRORS,
    ];
}

/// `show ip route` columns.
pub mod route_entry {
    pub const PROTOCOL: &str = "protocol";
    pub const PREFIX: &str = "prefix";
    pub const NETWORK: &str = "network";
    pub const PREFIX_LEN: &str = "prefix_len";
    pub const NEXT_HOP: &str = "next_hop";
    pub const INTERFACE: &str = "interface";

    pub const COLUMNS: [&str; 5] = [PROTOCOL, NETWORK, PREFIX_LEN, NEXT_HOP, INTERFACE];
}

/// The ordered column schema for a record kind.
///
/// This is the order fields appear in rendered tables and in
/// `Record::field_row`.
pub fn columns(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::InterfaceStatus => &interface_status::COLUMNS,
        RecordKind::CdpNeighbor => &cdp_neighbor::COLUMNS,
        RecordKind::LogEntry => &log_entry::COLUMNS,
        RecordKind::InterfaceDetail => &interface_detail::COLUMNS,
        RecordKind::RouteEntry => &route_entry::COLUMNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_columns() {
        for kind in RecordKind::ALL {
            assert!(!columns(kind).is_empty());
        }
    }

    #[test]
    fn test_column_names_are_distinct_within_kind() {
        for kind in RecordKind::ALL {
            let cols = columns(kind);
            let mut seen = std::collections::BTreeSet::new();
            for c in cols {
                assert!(seen.insert(c), "duplicate column {} in {}", c, kind);
            }
        }
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
