//! `show interfaces status` records.

use serde::Serialize;
use showparse_core_types::schema::interface_status as f;
use showparse_core_types::RecordKind;

use crate::errors::{Result, ScrapeError};
use crate::extract::FieldMap;
use crate::model::raw;

/// Link status column of `show interfaces status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortStatus {
    Connected,
    NotConnect,
    Disabled,
    ErrDisabled,
    /// Vendor vocabulary not covered above, kept verbatim.
    Other(String),
}

impl PortStatus {
    fn parse(value: &str) -> PortStatus {
        match value {
            "connected" => PortStatus::Connected,
            "notconnect" => PortStatus::NotConnect,
            "disabled" => PortStatus::Disabled,
            "err-disabled" => PortStatus::ErrDisabled,
            other => PortStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PortStatus::Connected => "connected",
            PortStatus::NotConnect => "notconnect",
            PortStatus::Disabled => "disabled",
            PortStatus::ErrDisabled => "err-disabled",
            PortStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for PortStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// Duplex column. `a-` prefixed values are auto-negotiated results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplexMode {
    Full,
    Half,
    Auto,
    AutoFull,
    AutoHalf,
    Other(String),
}

impl DuplexMode {
    fn parse(value: &str) -> DuplexMode {
        match value {
            "full" => DuplexMode::Full,
            "half" => DuplexMode::Half,
            "auto" => DuplexMode::Auto,
            "a-full" => DuplexMode::AutoFull,
            "a-half" => DuplexMode::AutoHalf,
            other => DuplexMode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DuplexMode::Full => "full",
            DuplexMode::Half => "half",
            DuplexMode::Auto => "auto",
            DuplexMode::AutoFull => "a-full",
            DuplexMode::AutoHalf => "a-half",
            DuplexMode::Other(s) => s,
        }
    }
}

impl std::fmt::Display for DuplexMode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// Vlan column: a numeric VLAN id, or the `trunk`/`routed` keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VlanAssignment {
    Id(u16),
    Trunk,
    Routed,
    Other(String),
}

impl VlanAssignment {
    fn parse(value: &str, ordinal: usize) -> Result<VlanAssignment> {
        match value {
            "trunk" => Ok(VlanAssignment::Trunk),
            "routed" => Ok(VlanAssignment::Routed),
            v if v.chars().all(|c| c.is_ascii_digit()) && !v.is_empty() => v
                .parse()
                .map(VlanAssignment::Id)
                .map_err(|e| ScrapeError::MalformedField {
                    kind: RecordKind::InterfaceStatus,
                    field: f::VLAN,
                    value: v.to_string(),
                    ordinal,
                    reason: e.to_string(),
                }),
            other => Ok(VlanAssignment::Other(other.to_string())),
        }
    }
}

impl std::fmt::Display for VlanAssignment {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VlanAssignment::Id(id) => write!(fmt, "{}", id),
            VlanAssignment::Trunk => write!(fmt, "trunk"),
            VlanAssignment::Routed => write!(fmt, "routed"),
            VlanAssignment::Other(s) => write!(fmt, "{}", s),
        }
    }
}

/// One port row of `show interfaces status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceStatusRecord {
    /// Short port name (`Te1/1/1`)
    pub port: String,

    /// Configured description; often empty
    pub name: String,

    pub status: PortStatus,

    pub vlan: VlanAssignment,

    pub duplex: DuplexMode,

    /// Speed token as displayed (`1000`, `a-1000`, `auto`)
    pub speed: String,

    /// Transceiver/media type (`1000BaseLH`); empty when the row is
    /// shorter than the Type column
    pub media_type: String,
}

impl InterfaceStatusRecord {
    pub fn from_fields(fields: &FieldMap, ordinal: usize) -> Result<InterfaceStatusRecord> {
        Ok(InterfaceStatusRecord {
            port: raw(fields, f::PORT).to_string(),
            name: raw(fields, f::NAME).to_string(),
            status: PortStatus::parse(raw(fields, f::STATUS)),
            vlan: VlanAssignment::parse(raw(fields, f::VLAN), ordinal)?,
            duplex: DuplexMode::parse(raw(fields, f::DUPLEX)),
            speed: raw(fields, f::SPEED).to_string(),
            media_type: raw(fields, f::TYPE).to_string(),
        })
    }

    /// A port appears once per capture; the port name is the identity.
    pub fn identity_key(&self) -> String {
        self.port.clone()
    }

    pub fn field_row(&self) -> Vec<String> {
        vec![
            self.port.clone(),
            self.name.clone(),
            self.status.to_string(),
            self.vlan.to_string(),
            self.duplex.to_string(),
            self.speed.clone(),
            self.media_type.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&'static str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect()
    }

    #[test]
    fn test_builds_typed_record() {
        let record = InterfaceStatusRecord::from_fields(
            &fields(&[
                (f::PORT, "Te1/1/1"),
                (f::NAME, ""),
                (f::STATUS, "disabled"),
                (f::VLAN, "1"),
                (f::DUPLEX, "full"),
                (f::SPEED, "1000"),
                (f::TYPE, "1000BaseLH"),
            ]),
            2,
        )
        .unwrap();
        assert_eq!(record.status, PortStatus::Disabled);
        assert_eq!(record.vlan, VlanAssignment::Id(1));
        assert_eq!(record.duplex, DuplexMode::Full);
    }

    #[test]
    fn test_vlan_keywords_and_overflow() {
        assert_eq!(
            VlanAssignment::parse("trunk", 1).unwrap(),
            VlanAssignment::Trunk
        );
        assert!(VlanAssignment::parse("99999", 1).is_err());
    }

    #[test]
    fn test_unknown_status_is_kept_verbatim() {
        assert_eq!(
            PortStatus::parse("monitoring"),
            PortStatus::Other("monitoring".to_string())
        );
    }
}
