//! Field extraction strategies
//!
//! Each strategy turns one [`Block`](crate::segment::Block) into a
//! [`FieldMap`], or signals "no match" — which the pipeline treats as a
//! soft skip, never an error. Strategies may carry state: the
//! fixed-column extractor re-learns boundaries from observed header rows,
//! and the route scanner carries subnet-header context across blocks.

pub mod fixed_column;
pub mod keyvalue_fold;
pub mod regex_capture;
pub mod route_scan;

use crate::errors::Result;
use crate::segment::Block;
use showparse_core_types::RawLine;
use std::collections::BTreeMap;

pub use fixed_column::FixedColumnExtractor;
pub use keyvalue_fold::KeyValueFoldExtractor;
pub use regex_capture::RegexCaptureExtractor;
pub use route_scan::RouteScanExtractor;

/// Raw field values keyed by the kind's schema field names.
///
/// Keys are fixed per record kind and known in advance; insertion order
/// is irrelevant, so an ordered map keeps output deterministic.
pub type FieldMap = BTreeMap<&'static str, String>;

/// A field-extraction strategy.
pub trait FieldExtract {
    /// Re-learn column boundaries from an observed header row.
    ///
    /// Only meaningful for fixed-column slicing; the default is a no-op.
    /// Fails hard if the observed header's column order disagrees with
    /// the declared schema.
    fn learn_header(&mut self, line: &RawLine) -> Result<()> {
        let _ = line;
        Ok(())
    }

    /// Extract the field map for one block, or `None` if the block does
    /// not match this strategy's shape.
    fn extract(&mut self, block: &Block) -> Option<FieldMap>;
}
