//! Correction table types
//!
//! This module provides the generation parameters, the materialized
//! [`CorrectionTable`] and the errors raised when either is invalid.

mod correction;
mod error;
mod params;

pub use correction::CorrectionTable;
pub use error::{ParamsError, TableError};
pub use params::{TableParams, MAX_INPUT_SIZE};
