//! Regex capture-group extraction
//!
//! A single-line pattern with named capture groups is matched against the
//! block's line; each group becomes one field. Groups that did not
//! participate in the match (optional trailing fields) are represented as
//! empty strings, never as missing keys.

use crate::extract::{FieldExtract, FieldMap};
use crate::segment::Block;
use regex::Regex;

/// Extracts fields from single-line blocks with one anchored pattern.
pub struct RegexCaptureExtractor {
    pattern: &'static Regex,
    /// Field name for each named group, in schema order. The group name
    /// equals the field name; listing them here keeps every key present
    /// in the output even when a group is optional.
    fields: &'static [&'static str],
}

impl RegexCaptureExtractor {
    pub fn new(pattern: &'static Regex, fields: &'static [&'static str]) -> Self {
        Self { pattern, fields }
    }
}

impl FieldExtract for RegexCaptureExtractor {
    fn extract(&mut self, block: &Block) -> Option<FieldMap> {
        let [line] = block.lines() else {
            return None;
        };
        let caps = self.pattern.captures(&line.text)?;
        let mut fields = FieldMap::new();
        for name in self.fields {
            let value = caps
                .name(name)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            fields.insert(name, value);
        }
        Some(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use showparse_core_types::RawLine;

    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<name>\S+) is (?P<state>up|down)(?: \((?P<why>[^)]*)\))?$").unwrap()
    });

    #[test]
    fn test_named_groups_become_fields() {
        let mut ex = RegexCaptureExtractor::new(&PATTERN, &["name", "state", "why"]);
        let fields = ex
            .extract(&Block::single(RawLine::new(1, "Te1/1 is down (disabled)")))
            .unwrap();
        assert_eq!(fields["name"], "Te1/1");
        assert_eq!(fields["state"], "down");
        assert_eq!(fields["why"], "disabled");
    }

    #[test]
    fn test_missing_optional_group_is_empty_string() {
        let mut ex = RegexCaptureExtractor::new(&PATTERN, &["name", "state", "why"]);
        let fields = ex
            .extract(&Block::single(RawLine::new(1, "Te1/1 is up")))
            .unwrap();
        assert_eq!(fields["why"], "");
    }

    #[test]
    fn test_non_matching_line_is_no_match() {
        let mut ex = RegexCaptureExtractor::new(&PATTERN, &["name", "state", "why"]);
        assert!(ex
            .extract(&Block::single(RawLine::new(1, "unrelated text")))
            .is_none());
    }
}
