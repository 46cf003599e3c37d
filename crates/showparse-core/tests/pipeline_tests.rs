//! Run-level pipeline behavior: statistics and hard-failure policy.

mod common;

use common::{parse_ok, status_capture};
use showparse_core::errors::ScrapeError;
use showparse_core::pipeline::parse_text;
use showparse_core_types::RecordKind;

// ===== EMPTY INPUT =====

#[test]
fn test_empty_input_is_a_hard_error() {
    let err = parse_text(RecordKind::RouteEntry, "").unwrap_err();
    assert_eq!(err.code(), "ERR_EMPTY_INPUT");
}

#[test]
fn test_zero_matching_blocks_reports_scan_counters() {
    let err = parse_text(RecordKind::RouteEntry, "nothing\nto\nsee\nhere").unwrap_err();
    match err {
        ScrapeError::EmptyInput {
            kind,
            lines_total,
            skipped,
        } => {
            assert_eq!(kind, RecordKind::RouteEntry);
            assert_eq!(lines_total, 4);
            assert_eq!(skipped, 4);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ===== STATISTICS =====

#[test]
fn test_stats_account_for_every_block() {
    let run = parse_ok(RecordKind::InterfaceStatus, &status_capture());
    assert_eq!(run.stats.lines_total, 8);
    assert_eq!(run.stats.blocks, 3);
    assert_eq!(run.stats.records, 3);
    assert_eq!(run.stats.skipped_lines, 0);
    assert_eq!(run.stats.malformed_blocks, 0);
}

#[test]
fn test_snapshot_order_matches_source_order() {
    let run = parse_ok(RecordKind::InterfaceStatus, &status_capture());
    let ports: Vec<String> = run
        .snapshot
        .iter()
        .map(|r| r.field_row()[0].clone())
        .collect();
    assert_eq!(ports, vec!["Te1/1/1", "Te1/1/2", "Te1/1/3"]);
}
