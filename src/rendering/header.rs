//! C header rendering
//!
//! Produces the same bytes as the long-standing generator script firmware
//! projects check in: two banner lines, then one array declaration with ten
//! values per line. No timestamps, so regenerating is byte-identical.

use cie1931::CorrectionTable;

/// Banner written above the declaration
pub const BANNER: &str = "// CIE1931 correction table\n// Automatically generated\n\n";

/// Values per output line
pub const VALUES_PER_LINE: usize = 10;

/// Render `table` as a C array declaration.
pub fn render_header(table: &CorrectionTable, element_type: &str, table_name: &str) -> String {
    // "NNN, " per value plus a "\n\t" per line
    let mut out = String::with_capacity(BANNER.len() + 64 + table.len() * 7);

    out.push_str(BANNER);
    out.push_str(&format!(
        "{} {}[{}] = {{\n",
        element_type,
        table_name,
        table.len()
    ));
    out.push('\t');

    for (i, value) in table.iter().enumerate() {
        out.push_str(&value.to_string());
        out.push_str(", ");
        if i % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
            out.push_str("\n\t");
        }
    }

    out.push_str("\n};\n\n");
    out
}
