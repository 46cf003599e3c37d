//! Record filtering
//!
//! Restores the original scripts' filter helpers as parsed predicates:
//! `Status~connected` (case-insensitive regex search on a schema field)
//! and `prefix_len>=24` (numeric comparison). Predicates are evaluated
//! against a record's schema field row and chained with AND semantics.

use crate::errors::{Result, ScrapeError};
use crate::model::Record;
use crate::snapshot::Snapshot;
use regex::{Regex, RegexBuilder};
use showparse_core_types::{schema, RecordKind};

/// Comparison operator of a numeric predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    fn holds(self, left: i64, right: i64) -> bool {
        match self {
            CmpOp::Eq => left == right,
            CmpOp::Lt => left < right,
            CmpOp::Le => left <= right,
            CmpOp::Gt => left > right,
            CmpOp::Ge => left >= right,
        }
    }
}

#[derive(Debug)]
enum Matcher {
    /// Case-insensitive substring search, like the original `re.search`.
    Search(Regex),
    Cmp(CmpOp, i64),
}

/// One parsed filter expression, bound to a record kind's schema.
#[derive(Debug)]
pub struct Predicate {
    /// Index of the field within the kind's column schema.
    column: usize,
    matcher: Matcher,
}

impl Predicate {
    /// Parse `field~pattern` or `field<op>value` against `kind`'s schema.
    pub fn parse(kind: RecordKind, expr: &str) -> Result<Predicate> {
        let invalid = |reason: &str| ScrapeError::InvalidFilter {
            expr: expr.to_string(),
            reason: reason.to_string(),
        };

        // Two-character operators first so `<=` is not read as `<`.
        let (field, matcher) = if let Some((field, pattern)) = expr.split_once('~') {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| invalid(&e.to_string()))?;
            (field, Matcher::Search(regex))
        } else if let Some((field, value)) = expr.split_once("<=") {
            (field, Matcher::Cmp(CmpOp::Le, parse_rhs(expr, value)?))
        } else if let Some((field, value)) = expr.split_once(">=") {
            (field, Matcher::Cmp(CmpOp::Ge, parse_rhs(expr, value)?))
        } else if let Some((field, value)) = expr.split_once('<') {
            (field, Matcher::Cmp(CmpOp::Lt, parse_rhs(expr, value)?))
        } else if let Some((field, value)) = expr.split_once('>') {
            (field, Matcher::Cmp(CmpOp::Gt, parse_rhs(expr, value)?))
        } else if let Some((field, value)) = expr.split_once('=') {
            (field, Matcher::Cmp(CmpOp::Eq, parse_rhs(expr, value)?))
        } else {
            return Err(invalid("expected one of `~`, `=`, `<`, `<=`, `>`, `>=`"));
        };

        let field = field.trim();
        let columns = schema::columns(kind);
        let column = columns
            .iter()
            .position(|c| *c == field)
            .ok_or_else(|| {
                invalid(&format!(
                    "unknown field `{}` for {} (expected one of: {})",
                    field,
                    kind,
                    columns.join(", ")
                ))
            })?;

        Ok(Predicate { column, matcher })
    }

    /// True if this predicate holds for the record.
    pub fn matches(&self, record: &Record) -> bool {
        let row = record.field_row();
        let value = row.get(self.column).map(String::as_str).unwrap_or("");
        match &self.matcher {
            Matcher::Search(regex) => regex.is_match(value),
            Matcher::Cmp(op, rhs) => value
                .replace(',', "")
                .parse::<i64>()
                .is_ok_and(|lhs| op.holds(lhs, *rhs)),
        }
    }
}

fn parse_rhs(expr: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ScrapeError::InvalidFilter {
            expr: expr.to_string(),
            reason: e.to_string(),
        })
}

/// Keep only the records every predicate accepts.
pub fn filter_snapshot(snapshot: &Snapshot, predicates: &[Predicate]) -> Snapshot {
    if predicates.is_empty() {
        return snapshot.clone();
    }
    let mut filtered = Snapshot::new(snapshot.kind());
    for record in snapshot.iter() {
        if predicates.iter().all(|p| p.matches(record)) {
            // A record drawn from this snapshot is always the right kind.
            let _ = filtered.push(record.clone());
        }
    }
    filtered
}
