use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Table error: {0}")]
    Table(#[from] cie1931::TableError),

    #[error("Invalid table name: {0:?} (must be a C identifier)")]
    InvalidTableName(String),

    #[error("Invalid element type: {0:?}")]
    InvalidElementType(String),

    #[error("Element type {element_type:?} holds at most {max}, output size is {output_size}")]
    ElementTypeTooNarrow {
        element_type: String,
        max: u64,
        output_size: u32,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Output directory does not exist: {}", .0.display())]
    MissingParent(PathBuf),

    #[error("No header path to verify (output goes to stdout); pass the header path explicitly")]
    NoHeaderPath,

    #[error("No array declaration found in header")]
    MissingDeclaration,

    #[error("Declared length {declared} does not match {actual} values")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Invalid value in header: {0:?}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
