//! Delimited table rendering.

use crate::snapshot::Snapshot;
use showparse_core_types::schema;

/// Render a snapshot as delimited text: a header row built from the
/// kind's column schema, then one row per record in source order.
///
/// Fields containing the delimiter, a quote, or a newline are quoted
/// with doubled inner quotes, so the output loads as standard CSV when
/// the delimiter is a comma.
pub fn render_table(snapshot: &Snapshot, delimiter: char) -> String {
    let columns = schema::columns(snapshot.kind());
    let mut out = String::new();

    render_row(&mut out, columns.iter().map(|c| (*c).to_string()), delimiter);
    for record in snapshot.iter() {
        render_row(&mut out, record.field_row().into_iter(), delimiter);
    }
    out
}

fn render_row(out: &mut String, fields: impl Iterator<Item = String>, delimiter: char) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(delimiter);
        }
        first = false;
        out.push_str(&quote(&field, delimiter));
    }
    out.push('\n');
}

fn quote(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
