use showparse_core::extract::FieldMap;
use showparse_core::model::Record;
use showparse_core::pipeline::{parse_text, ParseRun};
use showparse_core::snapshot::Snapshot;
use showparse_core_types::schema::route_entry as route_f;
use showparse_core_types::RecordKind;

/// Parse a capture that is expected to yield records.
#[allow(dead_code)]
pub fn parse_ok(kind: RecordKind, text: &str) -> ParseRun {
    parse_text(kind, text).expect("capture should parse")
}

/// A `show interfaces status` capture with preamble, header, and three
/// aligned rows (column boundaries follow the header titles).
#[allow(dead_code)]
pub fn status_capture() -> String {
    [
        "E-Cat6880X-01#show int status",
        "Load for five secs: 7%/0%; one minute: 6%; five minutes: 6%",
        "Time source is NTP, 21:46:09.148 JST Sun Jan 10 2016",
        "",
        "Port          Name               Status       Vlan       Duplex  Speed Type",
        "Te1/1/1                          disabled     1            full   1000 1000BaseLH",
        "Te1/1/2                          disabled     1            full   1000 1000BaseLH",
        "Te1/1/3       uplink to core     connected    trunk      full    10G   10GBaseLR",
    ]
    .join("\n")
}

/// A `show cdp neighbors` capture mixing a two-line neighbor and a
/// single-line neighbor.
#[allow(dead_code)]
pub fn cdp_capture() -> String {
    [
        "E-Cat6880X-01#show cdp neighbors",
        "Capability Codes: R - Router, T - Trans Bridge, B - Source Route Bridge",
        "",
        "Device ID        Local Intrfce     Holdtme    Capability  Platform  Port ID",
        "E-Cat3750X-41Stack",
        "                 Ten 2/4/4         147            R T S I WS-C3750X Ten 2/1/2",
        "E-Cat2960-11     Gig 1/0/1         132        S I         WS-C2960  Gig 0/1",
    ]
    .join("\n")
}

/// One full `show interfaces` stanza, as documented in the command
/// reference, followed by a second minimal stanza.
#[allow(dead_code)]
pub fn detail_capture() -> String {
    [
        "TenGigabitEthernet1/1/1 is administratively down, line protocol is down (disabled)",
        "  Hardware is C6k 10000Mb 802.3, address is d072.dcc4.59d6 (bia d072.dcc4.59d6)",
        "  MTU 1500 bytes, BW 1000000 Kbit, DLY 10 usec,",
        "    reliability 255/255, txload 0/255, rxload 0/255",
        "  Encapsulation ARPA, loopback not set",
        "  Keepalive set (10 sec)",
        "  Full-duplex, 1000Mb/s, media type is 1000BaseLH",
        "  input flow-control is off, output flow-control is off",
        "  Last input never, output never, output hang never",
        "  Input queue: 0/2000/0/0 (size/max/drops/flushes); Total output drops: 17",
        "  Queueing strategy: fifo",
        "  Output queue: 0/40 (size/max)",
        "  5 minute input rate 3000 bits/sec, 5 packets/sec",
        "  5 minute output rate 0 bits/sec, 0 packets/sec",
        "     15919273415 packets input, 3949235653296 bytes, 0 no buffer",
        "     0 runts, 0 giants, 0 throttles",
        "     2 input errors, 1 CRC, 0 frame, 0 overrun, 0 ignored",
        "     21323970279 packets output, 17076240928410 bytes, 0 underruns",
        "     4 output errors, 0 collisions, 0 interface resets",
        "TenGigabitEthernet1/1/2 is up, line protocol is up (connected)",
        "  Description: uplink to core",
        "  Full-duplex, 10Gb/s, media type is 10GBaseLR",
    ]
    .join("\n")
}

/// A `show ip route` capture exercising every documented line shape.
#[allow(dead_code)]
pub fn route_capture() -> String {
    [
        "Codes: L - local, C - connected, S - static, R - RIP, B - BGP",
        "Gateway of last resort is 10.245.2.2 to network 0.0.0.0",
        "",
        "      100.0.0.0/16 is subnetted, 63 subnets",
        "O E1     100.3.0.0 [110/122] via 10.245.2.2, 7w0d, Vlan102",
        "      110.0.0.0/8 is variably subnetted, 7 subnets, 2 masks",
        "S        110.0.0.0/8 is directly connected, Null0",
        "O        10.244.1.0/24 [110/2] via 10.245.11.2, 7w0d, Vlan111",
        "O    192.168.23.0/24 [110/2] via 192.168.13.3, 7w0d, Vlan13",
        "                  [110/2] via 192.168.12.2, 7w0d, Vlan12",
    ]
    .join("\n")
}

/// A `show logging` excerpt with one unrelated line in the middle.
#[allow(dead_code)]
pub fn log_capture() -> String {
    [
        "Syslog logging: enabled (0 messages dropped, 0 messages rate-limited)",
        "Sep  5 22:56:48.497: %LINK-SW1-3-UPDOWN: Interface Te1/3/11, changed state to down",
        "Sep  5 22:56:48.485: %EC-SW2_STBY-5-UNBUNDLE: Interface Te1/3/11 left the port-channel Port-channel111",
    ]
    .join("\n")
}

/// Build one typed route record directly, bypassing extraction.
#[allow(dead_code)]
pub fn route_record(proto: &str, prefix: &str, gw: &str, interface: &str) -> Record {
    let mut fields = FieldMap::new();
    fields.insert(route_f::PROTOCOL, proto.to_string());
    fields.insert(route_f::PREFIX, prefix.to_string());
    fields.insert(route_f::NEXT_HOP, gw.to_string());
    fields.insert(route_f::INTERFACE, interface.to_string());
    Record::from_fields(RecordKind::RouteEntry, &fields, 1).expect("route fields should coerce")
}

/// Build a route snapshot from `(proto, prefix, gw, interface)` rows.
#[allow(dead_code)]
pub fn route_snapshot(rows: &[(&str, &str, &str, &str)]) -> Snapshot {
    Snapshot::from_records(
        RecordKind::RouteEntry,
        rows.iter()
            .map(|(p, pre, gw, i)| route_record(p, pre, gw, i))
            .collect(),
    )
    .expect("homogeneous route records")
}
