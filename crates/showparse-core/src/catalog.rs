//! Per-kind parsing configuration
//!
//! Everything the pipeline needs to know about a record kind is declared
//! here, ahead of time: its segmentation mode, its extraction strategy
//! with pattern tables and column titles, and its column schema. Nothing
//! about the input shape is auto-detected at runtime.

use crate::extract::keyvalue_fold::FoldRule;
use crate::extract::{
    FieldExtract, FixedColumnExtractor, KeyValueFoldExtractor, RegexCaptureExtractor,
    RouteScanExtractor,
};
use crate::segment::{SegmentMode, SegmentRules};
use once_cell::sync::Lazy;
use regex::Regex;
use showparse_core_types::schema;
use showparse_core_types::RecordKind;

/// Template header of `show interfaces status`. Observed headers
/// re-derive the boundaries; this one seeds them.
const STATUS_HEADER: &str =
    "Port          Name               Status       Vlan       Duplex  Speed Type";

/// Template header of `show cdp neighbors`.
const CDP_HEADER: &str =
    "Device ID        Local Intrfce     Holdtme    Capability  Platform  Port ID";

// Fixed-column titles double as the extracted field names.
const STATUS_TITLES: &[&str] = &schema::interface_status::COLUMNS;
const CDP_TITLES: &[&str] = &schema::cdp_neighbor::COLUMNS;

// Sep  5 22:56:48.497: %LINK-SW1-3-UPDOWN: Interface Te1/3/11, changed state to down
static LOG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<date>\S.*?): %(?P<facility>[A-Z0-9_-]+)-(?P<severity>\d)-(?P<mnemonic>[A-Z0-9_-]+): (?P<description>.*)$",
    )
    .unwrap()
});

static LOG_FIELDS: &[&str] = &schema::log_entry::COLUMNS;

/// Per-field patterns folded over a `show interfaces` stanza. First
/// matching line wins per field; order follows the column schema.
static DETAIL_RULES: Lazy<Vec<FoldRule>> = Lazy::new(|| {
    use showparse_core_types::schema::interface_detail as f;
    let rule = |field, pattern: &str, default| FoldRule {
        field,
        pattern: Regex::new(pattern).unwrap(),
        default,
    };
    vec![
        rule(f::NAME, r"^(\S+) is .*, line protocol is .*$", ""),
        rule(f::STATUS, r"^\S+ is (.*), line protocol is .*$", ""),
        rule(f::LINE_PROTOCOL, r"^\S+ is .*, line protocol is (.*)$", ""),
        rule(f::DESCRIPTION, r"^\s+Description: (.*)$", ""),
        rule(f::DUPLEX, r"^\s+(.*), .*, media type is .*$", ""),
        rule(f::SPEED, r"^\s+\S+, (\S+)b/s, media type is .*$", ""),
        rule(f::MEDIA_TYPE, r"^\s+\S+, .*, media type is (.*)$", ""),
        rule(f::OUTPUT_DROPS, r"^\s+.* Total output drops: (\d+)", "0"),
        rule(
            f::INPUT_RATE_BPS,
            r"^\s+5 minute input rate (\d+) bits/sec.*$",
            "0",
        ),
        rule(
            f::INPUT_RATE_PPS,
            r"^\s+5 minute input rate .* bits/sec, (\d+) packets/sec$",
            "0",
        ),
        rule(
            f::OUTPUT_RATE_BPS,
            r"^\s+5 minute output rate (\d+) bits/sec.*$",
            "0",
        ),
        rule(
            f::OUTPUT_RATE_PPS,
            r"^\s+5 minute output rate .* bits/sec, (\d+) packets/sec$",
            "0",
        ),
        rule(f::INPUT_PACKETS, r"^\s+(\d+) packets input, .*$", "0"),
        rule(f::INPUT_BYTES, r"^\s+\d+ packets input, (\d+) bytes, .*$", "0"),
        rule(
            f::INPUT_ERRORS,
            r"^\s+(\d+) input errors, \d+ CRC, \d+ frame, \d+ overrun, \d+ ignored$",
            "0",
        ),
        rule(
            f::CRC,
            r"^\s+\d+ input errors, (\d+) CRC, \d+ frame, \d+ overrun, \d+ ignored$",
            "0",
        ),
        rule(f::OUTPUT_PACKETS, r"^\s+(\d+) packets output, .*$", "0"),
        rule(
            f::OUTPUT_BYTES,
            r"^\s+\d+ packets output, (\d+) bytes, .*$",
            "0",
        ),
        rule(
            f::OUTPUT_ERRORS,
            r"^\s+(\d+) output errors, \d+ collisions, \d+ interface resets$",
            "0",
        ),
    ]
});

/// A stanza without these fields is not an interface stanza at all.
static DETAIL_REQUIRED: &[&str] = &[
    schema::interface_detail::NAME,
    schema::interface_detail::STATUS,
    schema::interface_detail::LINE_PROTOCOL,
];

/// Segmentation rules for a record kind.
pub fn segment_rules(kind: RecordKind) -> SegmentRules {
    match kind {
        RecordKind::InterfaceStatus => SegmentRules {
            mode: SegmentMode::SingleLine,
            header_titles: STATUS_TITLES,
            complete_len: 0,
            prompt_marker: None,
        },
        RecordKind::CdpNeighbor => SegmentRules {
            mode: SegmentMode::ContinuationMerge,
            header_titles: CDP_TITLES,
            // Rows reaching the final (Port ID) column are complete on
            // their own; shorter rows are standalone identifiers.
            complete_len: FixedColumnExtractor::new(CDP_TITLES, CDP_HEADER).last_start(),
            prompt_marker: Some("#"),
        },
        RecordKind::LogEntry | RecordKind::RouteEntry => SegmentRules {
            mode: SegmentMode::Paragraph,
            header_titles: &[],
            complete_len: 0,
            prompt_marker: None,
        },
        RecordKind::InterfaceDetail => SegmentRules {
            mode: SegmentMode::Stanza,
            header_titles: &[],
            complete_len: 0,
            prompt_marker: None,
        },
    }
}

/// A fresh extraction strategy for a record kind.
///
/// Strategies are per-run: fixed-column boundaries and route context
/// must not leak between captures.
pub fn extractor(kind: RecordKind) -> Box<dyn FieldExtract> {
    match kind {
        RecordKind::InterfaceStatus => {
            Box::new(FixedColumnExtractor::new(STATUS_TITLES, STATUS_HEADER))
        }
        RecordKind::CdpNeighbor => Box::new(FixedColumnExtractor::new(CDP_TITLES, CDP_HEADER)),
        RecordKind::LogEntry => Box::new(RegexCaptureExtractor::new(&LOG_PATTERN, LOG_FIELDS)),
        RecordKind::InterfaceDetail => {
            Box::new(KeyValueFoldExtractor::new(&DETAIL_RULES, DETAIL_REQUIRED))
        }
        RecordKind::RouteEntry => Box::new(RouteScanExtractor::new()),
    }
}
