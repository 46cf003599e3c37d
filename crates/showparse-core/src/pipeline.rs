//! Extraction pipeline
//!
//! Wires catalog → segmenter → extractor → record builder for one
//! capture, accumulating run statistics. Soft failures (no-match blocks,
//! malformed fields) are counted and logged, never fatal; the only hard
//! failures are an observed header with reordered columns and a run that
//! produces no records at all.

use crate::catalog;
use crate::errors::{Result, ScrapeError};
use crate::extract::FieldExtract;
use crate::model::Record;
use crate::segment::{SegmentItem, SegmentIter};
use crate::snapshot::Snapshot;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use showparse_core_types::line::number_lines;
use showparse_core_types::{RawLine, RecordKind};

/// Per-run counters, reported in the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Lines handed to the segmenter
    pub lines_total: usize,
    /// Blocks the segmenter emitted
    pub blocks: usize,
    /// Records built
    pub records: usize,
    /// Lines belonging to blocks that matched no known shape
    pub skipped_lines: usize,
    /// Blocks dropped because a field failed type coercion
    pub malformed_blocks: usize,
}

/// The outcome of one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseRun {
    pub snapshot: Snapshot,
    pub stats: RunStats,
}

/// Extract a snapshot of `kind` from an ordered line sequence.
///
/// # Errors
///
/// - `ColumnOrderMismatch` — an observed header row disagrees with the
///   declared column order (aborts; slicing would misalign silently)
/// - `EmptyInput` — the input was empty or yielded zero records
pub fn parse_lines(kind: RecordKind, lines: Vec<RawLine>) -> Result<ParseRun> {
    log_op_start!("parse_lines", kind = kind.as_str(), lines = lines.len());

    let mut stats = RunStats {
        lines_total: lines.len(),
        ..RunStats::default()
    };
    let mut snapshot = Snapshot::new(kind);
    let mut extractor = catalog::extractor(kind);

    for item in SegmentIter::new(lines.into_iter(), catalog::segment_rules(kind)) {
        consume(kind, item, extractor.as_mut(), &mut snapshot, &mut stats).map_err(|e| {
            log_op_error!("parse_lines", &e);
            e
        })?;
    }

    if snapshot.is_empty() {
        let err = ScrapeError::EmptyInput {
            kind,
            lines_total: stats.lines_total,
            skipped: stats.skipped_lines,
        };
        log_op_error!("parse_lines", &err);
        return Err(err);
    }

    log_op_end!(
        "parse_lines",
        kind = kind.as_str(),
        records = stats.records,
        skipped = stats.skipped_lines
    );
    Ok(ParseRun { snapshot, stats })
}

/// Convenience: split a raw capture into numbered lines and parse it.
pub fn parse_text(kind: RecordKind, text: &str) -> Result<ParseRun> {
    parse_lines(kind, number_lines(text))
}

fn consume(
    kind: RecordKind,
    item: SegmentItem,
    extractor: &mut dyn FieldExtract,
    snapshot: &mut Snapshot,
    stats: &mut RunStats,
) -> Result<()> {
    match item {
        SegmentItem::Header(line) => extractor.learn_header(&line),
        SegmentItem::Record(block) => {
            stats.blocks += 1;
            match extractor.extract(&block) {
                None => {
                    stats.skipped_lines += block.len();
                    tracing::debug!(
                        component = module_path!(),
                        kind = kind.as_str(),
                        ordinal = block.ordinal(),
                        text = block.first().text.as_str(),
                        "skipping block: no known shape"
                    );
                    Ok(())
                }
                Some(fields) => match Record::from_fields(kind, &fields, block.ordinal()) {
                    Ok(record) => {
                        snapshot.push(record)?;
                        stats.records += 1;
                        Ok(())
                    }
                    Err(e) => {
                        stats.malformed_blocks += 1;
                        tracing::warn!(
                            component = module_path!(),
                            kind = kind.as_str(),
                            ordinal = block.ordinal(),
                            err.code = e.code(),
                            "dropping block: {}",
                            e
                        );
                        Ok(())
                    }
                },
            }
        }
    }
}
