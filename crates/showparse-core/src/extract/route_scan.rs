//! Route-table scanning
//!
//! `show ip route` output is line-per-path, but lines are not
//! self-contained: classful subnet headers (`100.0.0.0/16 is subnetted`)
//! supply the prefix length for the entries beneath them, and ECMP
//! continuation lines (`[110/2] via …` with no leading prefix) inherit
//! protocol and destination from the previous entry. The scanner tries an
//! ordered rule table per line and carries that context across blocks.

use crate::extract::{FieldExtract, FieldMap};
use crate::segment::Block;
use once_cell::sync::Lazy;
use regex::Regex;
use showparse_core_types::schema::route_entry as f;

const IPV4: &str = r"(?:\d{1,3}\.){3}\d{1,3}";

// 106.0.0.0/16 is subnetted, 7 subnets
static RE_FIXED_MASK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<addr>{IPV4})/(?P<mask>\d{{1,2}}) is subnetted"
    ))
    .unwrap()
});

// 110.0.0.0/8 is variably subnetted, 7 subnets, 2 masks
static RE_VARIABLE_MASK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<addr>{IPV4})/(?P<mask>\d{{1,2}}) is variably subnetted"
    ))
    .unwrap()
});

// S        110.0.0.0/8 is directly connected, Null0
static RE_DIRECTLY_CONNECTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<proto>[A-Za-z*][A-Za-z0-9* ]*?)\s+(?P<addr>{IPV4})/(?P<mask>\d{{1,2}}) is directly connected, (?P<interface>.+)$"
    ))
    .unwrap()
});

// O        10.244.1.0/24 [110/2] via 10.245.11.2, 7w0d, Vlan111
static RE_PREFIX_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<proto>[A-Za-z*][A-Za-z0-9* ]*?)\s+(?P<addr>{IPV4})/(?P<mask>\d{{1,2}}) \[\d+/\d+\] via (?P<gw>{IPV4}),.*,(?P<interface>.+)$"
    ))
    .unwrap()
});

// O E1     100.3.0.0 [110/122] via 10.245.2.2, 7w0d, Vlan102
static RE_CLASSFUL_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<proto>[A-Za-z*][A-Za-z0-9* ]*?)\s+(?P<addr>{IPV4}) \[\d+/\d+\] via (?P<gw>{IPV4}),.*,(?P<interface>.+)$"
    ))
    .unwrap()
});

// (ECMP continuation)  [110/2] via 192.168.12.2, 7w0d, Vlan12
static RE_ECMP_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s+\[\d+/\d+\] via (?P<gw>{IPV4}),.*,(?P<interface>.+)$"
    ))
    .unwrap()
});

/// Stateful per-line route extractor.
#[derive(Default)]
pub struct RouteScanExtractor {
    ctx_proto: Option<String>,
    ctx_addr: Option<String>,
    ctx_mask: Option<String>,
}

impl RouteScanExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(proto: &str, addr: &str, mask: &str, gw: &str, interface: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert(f::PROTOCOL, proto.trim().to_string());
        fields.insert(f::PREFIX, format!("{}/{}", addr.trim(), mask.trim()));
        fields.insert(f::NEXT_HOP, gw.trim().to_string());
        fields.insert(f::INTERFACE, interface.trim().to_string());
        fields
    }
}

impl FieldExtract for RouteScanExtractor {
    fn extract(&mut self, block: &Block) -> Option<FieldMap> {
        let [line] = block.lines() else {
            return None;
        };
        let text = &line.text;

        if let Some(caps) = RE_FIXED_MASK.captures(text) {
            // Subnet header: remember the mask its children share.
            self.ctx_addr = Some(caps["addr"].to_string());
            self.ctx_mask = Some(caps["mask"].to_string());
            return None;
        }
        if RE_VARIABLE_MASK.is_match(text) {
            // Children carry their own mask; nothing to remember.
            return None;
        }
        if let Some(caps) = RE_DIRECTLY_CONNECTED.captures(text) {
            return Some(Self::emit(
                &caps["proto"],
                &caps["addr"],
                &caps["mask"],
                "",
                &caps["interface"],
            ));
        }
        if let Some(caps) = RE_PREFIX_ROUTE.captures(text) {
            self.ctx_proto = Some(caps["proto"].trim().to_string());
            self.ctx_addr = Some(caps["addr"].to_string());
            self.ctx_mask = Some(caps["mask"].to_string());
            return Some(Self::emit(
                &caps["proto"],
                &caps["addr"],
                &caps["mask"],
                &caps["gw"],
                &caps["interface"],
            ));
        }
        if let Some(caps) = RE_CLASSFUL_ROUTE.captures(text) {
            // Mask comes from the most recent subnet header.
            let mask = self.ctx_mask.clone()?;
            self.ctx_proto = Some(caps["proto"].trim().to_string());
            self.ctx_addr = Some(caps["addr"].to_string());
            return Some(Self::emit(
                &caps["proto"],
                &caps["addr"],
                &mask,
                &caps["gw"],
                &caps["interface"],
            ));
        }
        if let Some(caps) = RE_ECMP_PATH.captures(text) {
            // Additional equal-cost path for the previous entry.
            let proto = self.ctx_proto.clone()?;
            let addr = self.ctx_addr.clone()?;
            let mask = self.ctx_mask.clone()?;
            return Some(Self::emit(
                &proto,
                &addr,
                &mask,
                &caps["gw"],
                &caps["interface"],
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showparse_core_types::RawLine;

    fn extract_line(ex: &mut RouteScanExtractor, text: &str) -> Option<FieldMap> {
        ex.extract(&Block::single(RawLine::new(1, text)))
    }

    #[test]
    fn test_directly_connected_has_no_next_hop() {
        let mut ex = RouteScanExtractor::new();
        let fields =
            extract_line(&mut ex, "S        110.0.0.0/8 is directly connected, Null0").unwrap();
        assert_eq!(fields["protocol"], "S");
        assert_eq!(fields["prefix"], "110.0.0.0/8");
        assert_eq!(fields["next_hop"], "");
        assert_eq!(fields["interface"], "Null0");
    }

    #[test]
    fn test_classful_entry_inherits_header_mask() {
        let mut ex = RouteScanExtractor::new();
        assert!(extract_line(&mut ex, "      100.0.0.0/16 is subnetted, 63 subnets").is_none());
        let fields = extract_line(
            &mut ex,
            "O E1     100.3.0.0 [110/122] via 10.245.2.2, 7w0d, Vlan102",
        )
        .unwrap();
        assert_eq!(fields["protocol"], "O E1");
        assert_eq!(fields["prefix"], "100.3.0.0/16");
        assert_eq!(fields["next_hop"], "10.245.2.2");
    }

    #[test]
    fn test_ecmp_path_inherits_previous_entry() {
        let mut ex = RouteScanExtractor::new();
        extract_line(
            &mut ex,
            "O    192.168.23.0/24 [110/2] via 192.168.13.3, 7w0d, Vlan13",
        )
        .unwrap();
        let fields = extract_line(&mut ex, "                  [110/2] via 192.168.12.2, 7w0d, Vlan12")
            .unwrap();
        assert_eq!(fields["prefix"], "192.168.23.0/24");
        assert_eq!(fields["next_hop"], "192.168.12.2");
        assert_eq!(fields["interface"], "Vlan12");
    }

    #[test]
    fn test_classful_entry_without_header_is_no_match() {
        let mut ex = RouteScanExtractor::new();
        assert!(extract_line(
            &mut ex,
            "O E1     100.3.0.0 [110/122] via 10.245.2.2, 7w0d, Vlan102"
        )
        .is_none());
    }
}
