//! Route-table scanning over `show ip route` captures.

mod common;

use common::{parse_ok, route_capture};
use showparse_core::model::{Record, RouteEntryRecord};
use showparse_core_types::RecordKind;
use std::net::Ipv4Addr;

fn routes(text: &str) -> Vec<RouteEntryRecord> {
    parse_ok(RecordKind::RouteEntry, text)
        .snapshot
        .iter()
        .map(|r| match r {
            Record::RouteEntry(route) => route.clone(),
            other => panic!("wrong record variant: {other:?}"),
        })
        .collect()
}

// ===== LINE SHAPES =====

#[test]
fn test_every_documented_shape_yields_a_path() {
    let routes = routes(&route_capture());
    assert_eq!(routes.len(), 5);
}

#[test]
fn test_classful_entry_inherits_subnet_header_mask() {
    let routes = routes(&route_capture());
    let classful = &routes[0];
    assert_eq!(classful.protocol, "O E1");
    assert_eq!(classful.network, Ipv4Addr::new(100, 3, 0, 0));
    assert_eq!(classful.prefix_len, 16);
    assert_eq!(classful.next_hop, Some(Ipv4Addr::new(10, 245, 2, 2)));
    assert_eq!(classful.interface, "Vlan102");
}

#[test]
fn test_directly_connected_route_has_no_next_hop() {
    let routes = routes(&route_capture());
    let direct = &routes[1];
    assert_eq!(direct.protocol, "S");
    assert_eq!(direct.network, Ipv4Addr::new(110, 0, 0, 0));
    assert_eq!(direct.prefix_len, 8);
    assert_eq!(direct.next_hop, None);
    assert_eq!(direct.interface, "Null0");
}

#[test]
fn test_ecmp_paths_become_separate_records() {
    let routes = routes(&route_capture());
    let first_path = &routes[3];
    let second_path = &routes[4];
    assert_eq!(first_path.network, second_path.network);
    assert_eq!(first_path.prefix_len, second_path.prefix_len);
    assert_eq!(first_path.next_hop, Some(Ipv4Addr::new(192, 168, 13, 3)));
    assert_eq!(second_path.next_hop, Some(Ipv4Addr::new(192, 168, 12, 2)));
    assert_eq!(second_path.interface, "Vlan12");
    // Inherited from the first path's entry line.
    assert_eq!(second_path.protocol, "O");
}

// ===== FAILURE POLICY =====

#[test]
fn test_banner_lines_are_skipped_not_fatal() {
    let run = parse_ok(RecordKind::RouteEntry, &route_capture());
    // Codes banner, gateway-of-last-resort line, and the two subnet
    // headers produce no records.
    assert_eq!(run.stats.skipped_lines, 4);
    assert_eq!(run.stats.malformed_blocks, 0);
}

#[test]
fn test_unparsable_address_drops_only_that_block() {
    let capture = [
        "O        10.244.1.0/24 [110/2] via 10.245.11.2, 7w0d, Vlan111",
        "O        999.944.1.0/24 [110/2] via 10.245.11.2, 7w0d, Vlan111",
    ]
    .join("\n");
    let run = parse_ok(RecordKind::RouteEntry, &capture);
    assert_eq!(run.stats.records, 1);
    assert_eq!(run.stats.malformed_blocks, 1);
}
