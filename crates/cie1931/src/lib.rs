//! cie1931: perceptual brightness correction tables
//!
//! Builds lookup tables that map a linear input level to the PWM duty
//! cycle that makes an LED *look* linearly brighter, using the CIE 1931
//! lightness formula.
//!
//! # Quick Start
//!
//! ```
//! use cie1931::{CorrectionTable, TableParams};
//!
//! let table = CorrectionTable::generate(&TableParams::default()).unwrap();
//!
//! assert_eq!(table.len(), 256);
//! assert_eq!(table.get(0), Some(0));
//! assert_eq!(table.max_value(), 236);
//! ```
//!
//! # Contract
//!
//! Every table handed out by this crate has exactly `input_size + 1`
//! entries, all within `0..=output_size`, non-decreasing, starting at 0.
//! Parameter pairs whose rounded curve would break this are rejected with a
//! [`TableError`] instead of producing a table.

pub mod curve;
pub mod table;

mod domain_tests;

pub use curve::{lightness_to_luminance, ParseRoundingError, Rounding};
pub use table::{CorrectionTable, ParamsError, TableError, TableParams};
