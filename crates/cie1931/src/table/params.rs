//! Generation parameters.

use super::error::ParamsError;
use crate::curve::Rounding;

/// Largest accepted input size.
///
/// Firmware tables are indexed by 8..16 bit levels; anything past 2^20
/// entries is almost certainly a typo.
pub const MAX_INPUT_SIZE: u32 = 1 << 20;

/// Parameters that fully determine a correction table.
///
/// # Defaults
///
/// - `input_size`: 255 (8-bit input level)
/// - `output_size`: 255 (8-bit PWM duty cycle)
/// - `rounding`: [`Rounding::HalfAwayFromZero`]
///
/// # Example
///
/// ```
/// use cie1931::{Rounding, TableParams};
///
/// let params = TableParams::new(255, 1023).rounding(Rounding::HalfEven);
/// assert_eq!(params.len(), 256);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableParams {
    /// Largest input level; the table has `input_size + 1` entries.
    pub input_size: u32,
    /// Largest output level the table is scaled to.
    pub output_size: u32,
    /// Rounding policy for scaled values.
    pub rounding: Rounding,
}

impl Default for TableParams {
    fn default() -> Self {
        Self::new(255, 255)
    }
}

impl TableParams {
    /// Create parameters with the default rounding policy.
    pub fn new(input_size: u32, output_size: u32) -> Self {
        Self {
            input_size,
            output_size,
            rounding: Rounding::default(),
        }
    }

    /// Set the rounding policy.
    #[inline]
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Number of entries a table built from these parameters has.
    #[inline]
    pub fn len(&self) -> usize {
        self.input_size as usize + 1
    }

    /// Always false: a table holds at least the origin entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check that the parameters describe a usable table.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.input_size == 0 {
            return Err(ParamsError::ZeroInputSize);
        }
        if self.input_size > MAX_INPUT_SIZE {
            return Err(ParamsError::InputSizeTooLarge {
                input_size: self.input_size,
                max: MAX_INPUT_SIZE,
            });
        }
        if self.output_size == 0 {
            return Err(ParamsError::ZeroOutputSize);
        }
        Ok(())
    }
}
