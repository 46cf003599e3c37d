//! The closed set of supported command-output shapes.

use serde::{Deserialize, Serialize};

/// Identifies which command output a snapshot or record was extracted from.
///
/// Every per-kind decision in the pipeline (segmentation mode, extraction
/// strategy, column schema, identity key) is keyed off this enum; there is
/// no runtime auto-detection of the input shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    /// `show interfaces status` — one fixed-width row per port
    InterfaceStatus,
    /// `show cdp neighbors` — one or two lines per neighbor
    CdpNeighbor,
    /// `show logging` — one syslog line per event
    LogEntry,
    /// `show interfaces` — one indented stanza per interface
    InterfaceDetail,
    /// `show ip route` — one line per route path, with context headers
    RouteEntry,
}

impl RecordKind {
    /// All supported kinds, in catalog order.
    pub const ALL: [RecordKind; 5] = [
        RecordKind::InterfaceStatus,
        RecordKind::CdpNeighbor,
        RecordKind::LogEntry,
        RecordKind::InterfaceDetail,
        RecordKind::RouteEntry,
    ];

    /// Stable kebab-case name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::InterfaceStatus => "interface-status",
            RecordKind::CdpNeighbor => "cdp-neighbor",
            RecordKind::LogEntry => "log-entry",
            RecordKind::InterfaceDetail => "interface-detail",
            RecordKind::RouteEntry => "route-entry",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = RecordKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown record kind `{}` (expected one of: {})", s, known.join(", "))
            })
    }
}
