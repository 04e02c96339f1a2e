//! Test fixtures and constants.

use std::path::PathBuf;

/// Header the legacy Python generator script emits for 255 -> 255
pub const REFERENCE_HEADER: &str = include_str!("../fixtures/cie1931.h");

/// Path of a file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Minimal YAML config selecting a 16-bit table
pub const WIDE_CONFIG_YAML: &str = "\
input_size: 255
output_size: 511
element_type: const uint16_t
table_name: cie_wide
";
