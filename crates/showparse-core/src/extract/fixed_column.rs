//! Fixed-column slicing
//!
//! Column boundaries are derived from a header row by locating each
//! column title's start offset; the next title's start (or end of line)
//! is the exclusive end. Data rows are sliced at those offsets and each
//! slice is trimmed. Boundaries start from the catalog's template header
//! and are re-derived from every observed header row, so captures from
//! devices that pad columns differently still slice correctly.

use crate::errors::{Result, ScrapeError};
use crate::extract::{FieldExtract, FieldMap};
use crate::segment::Block;
use showparse_core_types::RawLine;

/// Locate each title's start offset within a header row, in order.
///
/// Returns `None` if any title is missing or out of order.
pub fn derive_starts(header: &str, titles: &[&str]) -> Option<Vec<usize>> {
    let mut starts = Vec::with_capacity(titles.len());
    let mut cursor = 0;
    for title in titles {
        let i = header[cursor..].find(title)?;
        starts.push(cursor + i);
        cursor += i + title.len();
    }
    Some(starts)
}

/// Slices data rows at boundaries learned from the header row.
pub struct FixedColumnExtractor {
    titles: &'static [&'static str],
    starts: Vec<usize>,
}

impl FixedColumnExtractor {
    /// Build an extractor with boundaries derived from the catalog's
    /// template header. The template is static configuration; a template
    /// that does not list every title is a programming error.
    pub fn new(titles: &'static [&'static str], template_header: &str) -> Self {
        let starts = derive_starts(template_header, titles)
            .expect("template header must list every column title in order");
        Self { titles, starts }
    }

    /// The start offset of the final column.
    ///
    /// Rows shorter than this are standalone identifiers in
    /// continuation-merge segmentation.
    pub fn last_start(&self) -> usize {
        *self.starts.last().unwrap_or(&0)
    }

    fn slice(&self, text: &str, index: usize) -> String {
        let start = self.starts[index].min(text.len());
        let end = self
            .starts
            .get(index + 1)
            .copied()
            .unwrap_or(text.len())
            .min(text.len());
        text[start..end].trim().to_string()
    }

    /// A data row must reach into the second-to-last column to be a
    /// record; anything shorter is a separator, prompt, or fragment.
    fn reaches_fields(&self, text: &str) -> bool {
        match self.starts.len() {
            0 | 1 => !text.trim().is_empty(),
            n => text.len() > self.starts[n - 2],
        }
    }
}

impl FieldExtract for FixedColumnExtractor {
    fn learn_header(&mut self, line: &RawLine) -> Result<()> {
        match derive_starts(&line.text, self.titles) {
            Some(starts) => {
                self.starts = starts;
                Ok(())
            }
            None => {
                // Find the first title that is missing or out of place,
                // to name it in the error.
                let mut cursor = 0;
                let mut culprit = self.titles[0];
                for title in self.titles {
                    match line.text[cursor..].find(title) {
                        Some(i) => cursor += i + title.len(),
                        None => {
                            culprit = title;
                            break;
                        }
                    }
                }
                Err(ScrapeError::ColumnOrderMismatch {
                    column: culprit,
                    ordinal: line.ordinal,
                    header: line.text.clone(),
                })
            }
        }
    }

    fn extract(&mut self, block: &Block) -> Option<FieldMap> {
        let mut fields = FieldMap::new();
        match block.lines() {
            [line] => {
                if !self.reaches_fields(&line.text) {
                    return None;
                }
                for (i, title) in self.titles.iter().enumerate() {
                    fields.insert(title, self.slice(&line.text, i));
                }
            }
            [ident, rest] => {
                // Continuation block: the standalone identifier line is
                // the first column's whole value; the remaining columns
                // slice from the second line.
                let key = ident.text.trim();
                if key.is_empty() || !self.reaches_fields(&rest.text) {
                    return None;
                }
                fields.insert(self.titles[0], key.to_string());
                for (i, title) in self.titles.iter().enumerate().skip(1) {
                    fields.insert(title, self.slice(&rest.text, i));
                }
            }
            _ => return None,
        }
        // The key column is never legitimately empty.
        if fields.get(self.titles[0]).map_or(true, |v| v.is_empty()) {
            return None;
        }
        Some(fields)
    }
}
