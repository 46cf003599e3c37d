pub mod diff;
pub mod parse;

use showparse_core_types::RecordKind;
use std::str::FromStr;

/// clap value parser for `--kind`.
pub fn parse_kind(s: &str) -> Result<RecordKind, String> {
    RecordKind::from_str(s)
}
