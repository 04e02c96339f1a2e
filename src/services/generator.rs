//! Table generation pipeline: config -> table -> header -> output.

use cie1931::CorrectionTable;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::models::GeneratorConfig;
use crate::rendering::{parse_header, render_header};
use crate::services::output::write_atomic;

/// A generated table together with its rendered header
#[derive(Debug, Clone)]
pub struct Generated {
    pub table: CorrectionTable,
    pub header: String,
}

/// Build the table and header described by `config` without touching disk.
pub fn generate(config: &GeneratorConfig) -> Result<Generated, GenerateError> {
    config.validate()?;

    let params = config.table_params();
    tracing::debug!(
        input_size = params.input_size,
        output_size = params.output_size,
        rounding = %params.rounding,
        element_type = %config.element_type,
        table_name = %config.table_name,
        "Generating correction table"
    );

    let table = CorrectionTable::generate(&params)?;
    let header = render_header(&table, &config.element_type, &config.table_name);

    tracing::info!(
        entries = table.len(),
        max = table.max_value(),
        "Generated correction table"
    );

    Ok(Generated { table, header })
}

/// Generate and write the header to `config.output` (or stdout for "-").
pub fn write(config: &GeneratorConfig) -> Result<Generated, GenerateError> {
    let generated = generate(config)?;

    if config.writes_to_stdout() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(generated.header.as_bytes())?;
        stdout.flush()?;
    } else {
        write_atomic(&config.output, generated.header.as_bytes())?;
        tracing::info!(
            path = %config.output.display(),
            bytes = generated.header.len(),
            "Wrote header"
        );
    }

    Ok(generated)
}

/// Outcome of comparing an existing header with a fresh generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub path: PathBuf,
    pub expected_len: usize,
    pub found_len: usize,
    pub name_matches: bool,
    pub type_matches: bool,
    /// First index whose value differs, or where one table runs out
    pub first_difference: Option<usize>,
    /// Whether the file is byte-for-byte what `generate` renders
    pub byte_identical: bool,
}

impl VerifyReport {
    /// Whether the header declares the same array with the same contents
    pub fn matches(&self) -> bool {
        self.name_matches
            && self.type_matches
            && self.expected_len == self.found_len
            && self.first_difference.is_none()
    }
}

/// Compare the header at `path` against what `config` would generate.
pub fn verify(config: &GeneratorConfig, path: &Path) -> Result<VerifyReport, GenerateError> {
    if path.as_os_str() == "-" {
        return Err(GenerateError::NoHeaderPath);
    }

    let expected = generate(config)?;
    let text = std::fs::read_to_string(path)?;
    let parsed = parse_header(&text)?;

    let expected_values = expected.table.values();
    let first_difference = expected_values
        .iter()
        .zip(&parsed.values)
        .position(|(a, b)| a != b)
        .or_else(|| {
            (expected_values.len() != parsed.len())
                .then_some(expected_values.len().min(parsed.len()))
        });

    let report = VerifyReport {
        path: path.to_path_buf(),
        expected_len: expected_values.len(),
        found_len: parsed.len(),
        name_matches: parsed.table_name == config.table_name,
        type_matches: normalize_type(&parsed.element_type) == normalize_type(&config.element_type),
        first_difference,
        byte_identical: text == expected.header,
    };

    if report.matches() {
        tracing::info!(path = %path.display(), "Header is up to date");
    } else {
        tracing::warn!(
            path = %path.display(),
            first_difference = ?report.first_difference,
            name_matches = report.name_matches,
            type_matches = report.type_matches,
            "Header differs from generated table"
        );
    }

    Ok(report)
}

fn normalize_type(element_type: &str) -> String {
    element_type.split_whitespace().collect::<Vec<_>>().join(" ")
}
