//! Error types for table generation
//!
//! [`ParamsError`] covers rejected generation parameters, [`TableError`]
//! covers tables that would break the contract owed to firmware consumers.

use std::fmt;

/// Error type for generation parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Input size of zero leaves no interval to sample
    ZeroInputSize,
    /// Output size of zero would scale every entry to nothing
    ZeroOutputSize,
    /// Input size exceeds the supported maximum
    InputSizeTooLarge {
        /// Requested input size
        input_size: u32,
        /// Largest accepted input size
        max: u32,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::ZeroInputSize => {
                write!(f, "input size must be at least 1")
            }
            ParamsError::ZeroOutputSize => {
                write!(f, "output size must be at least 1")
            }
            ParamsError::InputSizeTooLarge { input_size, max } => {
                write!(f, "input size {} exceeds maximum of {}", input_size, max)
            }
        }
    }
}

impl std::error::Error for ParamsError {}

/// Error type for tables that violate the consumer contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Generation parameters were rejected
    Params(ParamsError),
    /// Entry count differs from `input_size + 1`
    LengthMismatch {
        /// Expected number of entries
        expected: usize,
        /// Actual number of entries
        actual: usize,
    },
    /// An entry fell outside `0..=output_size`
    OutOfRange {
        /// Index of the offending entry
        index: usize,
        /// Value produced at that index
        value: i64,
        /// Upper bound of the output range
        output_size: u32,
    },
    /// An entry is smaller than its predecessor
    NotMonotonic {
        /// Index of the entry before the drop
        index: usize,
        /// Value at `index`
        value: u32,
        /// Value at `index + 1`
        next: u32,
    },
    /// Entry 0 is not 0
    NonZeroOrigin {
        /// Value found at index 0
        value: u32,
    },
}

impl From<ParamsError> for TableError {
    fn from(err: ParamsError) -> Self {
        TableError::Params(err)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Params(err) => write!(f, "invalid parameters: {}", err),
            TableError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "table length mismatch: expected {} entries, got {}",
                    expected, actual
                )
            }
            TableError::OutOfRange {
                index,
                value,
                output_size,
            } => {
                write!(
                    f,
                    "entry {} is {}, outside 0..={}",
                    index, value, output_size
                )
            }
            TableError::NotMonotonic { index, value, next } => {
                write!(
                    f,
                    "table is not monotonic: entry {} is {} but entry {} is {}",
                    index,
                    value,
                    index + 1,
                    next
                )
            }
            TableError::NonZeroOrigin { value } => {
                write!(f, "entry 0 must be 0, got {}", value)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Params(err) => Some(err),
            _ => None,
        }
    }
}
