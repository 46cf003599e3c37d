//! Raw input lines tagged with their source position.

use serde::{Deserialize, Serialize};

/// One raw text line plus its 1-based position in the input.
///
/// The ordinal exists purely for diagnostics (skip logging, malformed-field
/// errors); it never participates in record identity. Lines are expected to
/// arrive with trailing whitespace already stripped, the way the line
/// sources produce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    /// 1-based position in the source capture
    pub ordinal: usize,

    /// Line text, without the trailing newline
    pub text: String,
}

impl RawLine {
    /// Create a line with an explicit ordinal.
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }

    /// True if the line is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of leading space characters.
    ///
    /// Device output indents continuation and stanza-detail lines with
    /// plain spaces; tabs do not occur in the documented shapes.
    pub fn indent(&self) -> usize {
        self.text.chars().take_while(|c| *c == ' ').count()
    }

    /// True if the line starts at column zero with visible text.
    pub fn starts_flush(&self) -> bool {
        !self.is_blank() && self.indent() == 0
    }
}

impl std::fmt::Display for RawLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.ordinal, self.text)
    }
}

/// Split a text capture into numbered lines, stripping trailing whitespace.
///
/// This mirrors what every line source does before handing lines to the
/// pipeline, so in-memory captures and file captures segment identically.
pub fn number_lines(text: &str) -> Vec<RawLine> {
    text.lines()
        .enumerate()
        .map(|(i, l)| RawLine::new(i + 1, l.trim_end()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_one_based() {
        let lines = number_lines("a\nb\nc");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].ordinal, 1);
        assert_eq!(lines[2].ordinal, 3);
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let lines = number_lines("Te1/1/1   \r\n  indented  ");
        assert_eq!(lines[0].text, "Te1/1/1");
        assert_eq!(lines[1].text, "  indented");
    }

    #[test]
    fn test_indent_and_blank() {
        assert_eq!(RawLine::new(1, "  two spaces").indent(), 2);
        assert!(RawLine::new(1, "   ").is_blank());
        assert!(RawLine::new(1, "flush").starts_flush());
        assert!(!RawLine::new(1, " not flush").starts_flush());
    }
}
