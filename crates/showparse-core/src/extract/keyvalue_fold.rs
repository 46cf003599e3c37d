//! Multi-line key/value folding
//!
//! Applied to stanza blocks. A fixed catalogue of per-field patterns is
//! tried against every line of the block; the first line matching a
//! field's pattern supplies that field's value. Fields never matched keep
//! a declared default (zero for counters, empty string for labels), so
//! fields of interest may be scattered across an arbitrary-length,
//! variable-content stanza.

use crate::extract::{FieldExtract, FieldMap};
use crate::segment::Block;
use regex::Regex;

/// One field's pattern and its default when no line matches.
pub struct FoldRule {
    pub field: &'static str,
    pub pattern: Regex,
    pub default: &'static str,
}

/// Folds a stanza block into one field map via a per-field rule table.
pub struct KeyValueFoldExtractor {
    rules: &'static [FoldRule],
    /// Fields that must match for the block to count as a record at all
    /// (the stanza-header fields). A block missing any of these is
    /// no-match, not a defaulted record.
    required: &'static [&'static str],
}

impl KeyValueFoldExtractor {
    pub fn new(rules: &'static [FoldRule], required: &'static [&'static str]) -> Self {
        Self { rules, required }
    }
}

impl FieldExtract for KeyValueFoldExtractor {
    fn extract(&mut self, block: &Block) -> Option<FieldMap> {
        let mut fields = FieldMap::new();
        for rule in self.rules {
            for line in block.lines() {
                if let Some(caps) = rule.pattern.captures(&line.text) {
                    if let Some(m) = caps.get(1) {
                        fields.insert(rule.field, m.as_str().trim().to_string());
                        break;
                    }
                }
            }
        }
        for field in self.required {
            if !fields.contains_key(field) {
                return None;
            }
        }
        for rule in self.rules {
            fields
                .entry(rule.field)
                .or_insert_with(|| rule.default.to_string());
        }
        Some(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use showparse_core_types::RawLine;

    static RULES: Lazy<Vec<FoldRule>> = Lazy::new(|| {
        vec![
            FoldRule {
                field: "name",
                pattern: Regex::new(r"^(\S+) is .*$").unwrap(),
                default: "",
            },
            FoldRule {
                field: "mtu",
                pattern: Regex::new(r"^\s+MTU (\d+) bytes").unwrap(),
                default: "0",
            },
        ]
    });

    fn block(texts: &[&str]) -> Block {
        let mut lines = texts
            .iter()
            .enumerate()
            .map(|(i, t)| RawLine::new(i + 1, *t));
        let mut b = Block::single(lines.next().unwrap());
        for l in lines {
            b.push(l);
        }
        b
    }

    #[test]
    fn test_first_match_wins_and_defaults_fill() {
        let mut ex = KeyValueFoldExtractor::new(&RULES, &["name"]);
        let fields = ex.extract(&block(&["Te1/1 is up"])).unwrap();
        assert_eq!(fields["name"], "Te1/1");
        assert_eq!(fields["mtu"], "0");
    }

    #[test]
    fn test_missing_required_field_is_no_match() {
        let mut ex = KeyValueFoldExtractor::new(&RULES, &["name"]);
        assert!(ex.extract(&block(&["  MTU 1500 bytes"])).is_none());
    }
}
