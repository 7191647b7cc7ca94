use std::fmt::Write as _;

use crate::map::LabelMap;

/// Render the map as a fixed-width two-column table: right-aligned
/// 7-char ID column, left-aligned 50-char LABEL column, a dashed
/// separator row, and a trailing total-count line.
pub fn render(map: &LabelMap) -> String {
    let mut out = String::from("Label Map\n\n");
    let _ = writeln!(out, "{:>7} | {:<50}", "ID", "LABEL");
    let _ = writeln!(
        out,
        "{:>7}+{:<50}",
        "--------", "----------------------------------------------"
    );
    for (label, id) in map.iter() {
        let _ = writeln!(out, "{:>7} | {:<50}", id, label);
    }
    let _ = write!(out, "\nTotal Label Count: {}", map.len());
    out
}
