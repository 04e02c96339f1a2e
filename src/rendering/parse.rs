//! Parse a generated (or hand-edited) header back into values.
//!
//! Only the array declaration matters: comments, whitespace and line
//! wrapping are ignored, and a trailing comma is accepted.

use cie1931::{CorrectionTable, TableParams};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::GenerateError;

/// An array declaration read from a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub element_type: String,
    pub table_name: String,
    /// Length between the brackets, if one was given
    pub declared_len: Option<usize>,
    pub values: Vec<u32>,
}

impl ParsedTable {
    /// Number of entries the declaration provides
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check the parsed values against the table contract for `params`.
    pub fn into_table(self, params: TableParams) -> Result<CorrectionTable, GenerateError> {
        Ok(CorrectionTable::from_values(params, self.values)?)
    }
}

fn comment_regex() -> &'static Regex {
    static COMMENTS: OnceLock<Regex> = OnceLock::new();
    COMMENTS.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("comment regex"))
}

fn declaration_regex() -> &'static Regex {
    static DECLARATION: OnceLock<Regex> = OnceLock::new();
    DECLARATION.get_or_init(|| {
        Regex::new(
            r"(?x)
            (?P<ty>[A-Za-z_][A-Za-z0-9_]*(?:[\ \t]+[A-Za-z_][A-Za-z0-9_]*)*?)
            \s+
            (?P<name>[A-Za-z_][A-Za-z0-9_]*)
            \s*\[\s*(?P<len>[0-9]*)\s*\]
            (?:\s*[A-Za-z_][A-Za-z0-9_]*)*
            \s*=\s*\{
            (?P<body>[^}]*)
            \}\s*;",
        )
        .expect("declaration regex")
    })
}

/// Parse the first array declaration in `text`.
pub fn parse_header(text: &str) -> Result<ParsedTable, GenerateError> {
    let stripped = comment_regex().replace_all(text, " ");

    let caps = declaration_regex()
        .captures(&stripped)
        .ok_or(GenerateError::MissingDeclaration)?;

    let declared_len = match &caps["len"] {
        "" => None,
        len => Some(
            len.parse::<usize>()
                .map_err(|_| GenerateError::InvalidValue(len.to_string()))?,
        ),
    };

    let values = caps["body"]
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(declared) = declared_len {
        if declared != values.len() {
            return Err(GenerateError::LengthMismatch {
                declared,
                actual: values.len(),
            });
        }
    }

    Ok(ParsedTable {
        element_type: caps["ty"].to_string(),
        table_name: caps["name"].to_string(),
        declared_len,
        values,
    })
}

fn parse_value(token: &str) -> Result<u32, GenerateError> {
    let digits = token.trim_end_matches(['u', 'U']);
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    };
    parsed.map_err(|_| GenerateError::InvalidValue(token.to_string()))
}
