//! Line sources
//!
//! Reads a capture into numbered lines. The path `-` reads stdin, the
//! same convention the capture-collection scripts use when piping
//! command output straight through.

use showparse_core_types::line::number_lines;
use showparse_core_types::RawLine;
use std::io::Read;
use std::path::Path;

/// True if the path means "read stdin".
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a capture from a file or stdin into numbered lines.
pub fn read_lines(path: &Path) -> Result<Vec<RawLine>, std::io::Error> {
    let text = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(number_lines(&text))
}
