//! Human-readable diff rendering.

use crate::diff::model::RecordDiff;

/// Render a [`RecordDiff`] the way operators read route diffs:
/// `- `-prefixed removed rows, `+ `-prefixed added rows, then a count
/// trailer. Common records are counted, not listed.
///
/// ```text
/// - O,10.2.0.0,16,10.245.2.2,Vlan102
/// + O,10.3.0.0,16,10.245.2.2,Vlan102
/// = : 1
/// - : 1
/// + : 1
/// ```
pub fn render_diff_summary(diff: &RecordDiff) -> String {
    let mut out = String::new();

    for record in &diff.removed {
        out.push_str("- ");
        out.push_str(&record.field_row().join(","));
        out.push('\n');
    }
    for record in &diff.added {
        out.push_str("+ ");
        out.push_str(&record.field_row().join(","));
        out.push('\n');
    }

    out.push_str(&format!("= : {}\n", diff.common_count));
    out.push_str(&format!("- : {}\n", diff.removed_count()));
    out.push_str(&format!("+ : {}\n", diff.added_count()));
    out
}
