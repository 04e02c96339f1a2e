//! The materialized correction table.

use super::error::TableError;
use super::params::TableParams;
use crate::curve::lightness_to_luminance;

/// A validated CIE 1931 correction table.
///
/// Entry `i` is the output level for input level `i / input_size`. A
/// `CorrectionTable` can only be obtained through [`generate`](Self::generate)
/// or [`from_values`](Self::from_values), both of which enforce the
/// contract: `input_size + 1` entries, each in `0..=output_size`,
/// non-decreasing, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionTable {
    params: TableParams,
    values: Vec<u32>,
}

impl CorrectionTable {
    /// Evaluate the correction curve for every input level.
    ///
    /// # Errors
    ///
    /// - [`TableError::Params`] if `params` fail validation
    /// - [`TableError::NotMonotonic`] if rounding the curve at this output
    ///   scale produces a dip (the curve steps down slightly at the 8% knee,
    ///   which becomes visible at some scales). Rejected pairs include
    ///   common PWM resolutions: 255 -> 1000 and 255 -> 4095 dip at entry
    ///   20, 1023 -> 1023 dips at entry 81.
    ///
    /// # Example
    ///
    /// ```
    /// use cie1931::{CorrectionTable, TableParams, TableError};
    ///
    /// let table = CorrectionTable::generate(&TableParams::new(255, 255)).unwrap();
    /// assert_eq!(&table.values()[..10], &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
    ///
    /// let dip = CorrectionTable::generate(&TableParams::new(255, 1000));
    /// assert!(matches!(dip, Err(TableError::NotMonotonic { index: 20, .. })));
    /// ```
    pub fn generate(params: &TableParams) -> Result<Self, TableError> {
        params.validate()?;

        let input = f64::from(params.input_size);
        let output = f64::from(params.output_size);

        let mut values = Vec::with_capacity(params.len());
        for (index, level) in (0..=params.input_size).enumerate() {
            let x = f64::from(level) / input;
            let scaled = params.rounding.apply(lightness_to_luminance(x) * output);

            if !(0.0..=output).contains(&scaled) {
                return Err(TableError::OutOfRange {
                    index,
                    value: scaled as i64,
                    output_size: params.output_size,
                });
            }
            values.push(scaled as u32);
        }

        Self::from_values(*params, values)
    }

    /// Wrap values obtained elsewhere, checking them against the contract.
    ///
    /// Used to validate tables read back from generated headers.
    pub fn from_values(params: TableParams, values: Vec<u32>) -> Result<Self, TableError> {
        params.validate()?;

        if values.len() != params.len() {
            return Err(TableError::LengthMismatch {
                expected: params.len(),
                actual: values.len(),
            });
        }

        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| v > params.output_size)
        {
            return Err(TableError::OutOfRange {
                index,
                value: i64::from(value),
                output_size: params.output_size,
            });
        }

        if values[0] != 0 {
            return Err(TableError::NonZeroOrigin { value: values[0] });
        }

        if let Some(index) = values.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(TableError::NotMonotonic {
                index,
                value: values[index],
                next: values[index + 1],
            });
        }

        Ok(Self { params, values })
    }

    /// Parameters the table was built from.
    #[inline]
    pub fn params(&self) -> &TableParams {
        &self.params
    }

    /// All entries, indexed by input level.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of entries (`input_size + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry for input level `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Output at full input, i.e. the last entry.
    #[inline]
    pub fn max_value(&self) -> u32 {
        self.values.last().copied().unwrap_or(0)
    }

    /// Iterate over entries in input order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.values.iter()
    }

    /// Consume the table, returning its entries.
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }
}

impl<'a> IntoIterator for &'a CorrectionTable {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
