//! Domain-critical regression tests for cie1931.
//!
//! Each test documents the firmware-facing property it guards.

#[cfg(test)]
mod domain_tests {
    use crate::curve::{lightness_to_luminance, Rounding};
    use crate::table::{CorrectionTable, TableError, TableParams};

    fn assert_contract(table: &CorrectionTable) {
        let params = table.params();
        assert_eq!(table.len(), params.input_size as usize + 1);
        assert_eq!(table.get(0), Some(0));
        for (i, pair) in table.values().windows(2).enumerate() {
            assert!(
                pair[0] <= pair[1],
                "entry {} ({}) > entry {} ({}) for {:?}",
                i,
                pair[0],
                i + 1,
                pair[1],
                params
            );
        }
        assert!(table.iter().all(|&v| v <= params.output_size));
    }

    // ========================================================================
    // Contract across input resolutions
    // ========================================================================

    /// If this breaks, firmware indexing a table with 8-bit output may see
    /// brightness go down while the requested level goes up.
    #[test]
    fn test_every_input_size_with_8bit_output_holds_contract() {
        for input_size in 1..=1024 {
            let table = CorrectionTable::generate(&TableParams::new(input_size, 255))
                .unwrap_or_else(|e| panic!("input_size {input_size}: {e}"));
            assert_contract(&table);
            assert_eq!(table.max_value(), 236);
        }
    }

    /// The only place the rounded curve can dip is the knee between the
    /// linear and cubic pieces. Every rejected output scale must be rejected
    /// there, and every accepted one must honor the contract.
    #[test]
    fn test_output_sweep_only_fails_at_knee() {
        let mut rejected = 0;
        for output_size in 1..=1023 {
            match CorrectionTable::generate(&TableParams::new(255, output_size)) {
                Ok(table) => assert_contract(&table),
                Err(TableError::NotMonotonic { index, .. }) => {
                    assert_eq!(index, 20, "output_size {output_size}");
                    rejected += 1;
                }
                Err(other) => panic!("output_size {output_size}: unexpected {other}"),
            }
        }
        assert!(rejected > 0, "knee dip should be caught for some scales");
    }

    /// 10-bit and 12-bit PWM setups hit the knee dip too; they must be
    /// refused rather than emitted.
    #[test]
    fn test_wide_pwm_scales_rejected_at_knee() {
        for (input_size, output_size, knee) in [(255, 1000, 20), (255, 4095, 20), (1023, 1023, 81)] {
            match CorrectionTable::generate(&TableParams::new(input_size, output_size)) {
                Err(TableError::NotMonotonic { index, value, next }) => {
                    assert_eq!(index, knee, "{input_size} -> {output_size}");
                    assert!(next < value);
                }
                other => panic!("{input_size} -> {output_size}: expected NotMonotonic, got {other:?}"),
            }
        }
    }

    // ========================================================================
    // Rescaling
    // ========================================================================

    /// Doubling the output scale should double every entry, give or take the
    /// rounding step, while keeping the zero origin and monotonicity.
    #[test]
    fn test_rescaling_is_proportional() {
        let base = CorrectionTable::generate(&TableParams::new(255, 255)).unwrap();
        let double = CorrectionTable::generate(&TableParams::new(255, 510)).unwrap();
        assert_contract(&double);

        for (i, (&a, &b)) in base.iter().zip(double.iter()).enumerate() {
            let diff = i64::from(b) - 2 * i64::from(a);
            assert!(diff.abs() <= 1, "entry {i}: {a} vs {b}");
        }
    }

    #[test]
    fn test_common_scales() {
        for (output_size, last, knee) in [
            (100, 93, 1),
            (127, 118, 1),
            (200, 185, 2),
            (255, 236, 2),
            (511, 473, 4),
            (1023, 948, 9),
        ] {
            let table = CorrectionTable::generate(&TableParams::new(255, output_size)).unwrap();
            assert_contract(&table);
            assert_eq!(table.max_value(), last, "output_size {output_size}");
            assert_eq!(table.get(20), Some(knee));
            assert_eq!(table.get(21), Some(knee));
        }
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    #[test]
    fn test_generation_is_deterministic() {
        let params = TableParams::new(255, 255);
        let a = CorrectionTable::generate(&params).unwrap();
        let b = CorrectionTable::generate(&params).unwrap();
        assert_eq!(a, b);
    }

    /// Ties at exactly .5 are where the two rounding policies split; at the
    /// reference resolution none occur, so both policies emit the same table.
    #[test]
    fn test_no_ties_at_reference_resolution() {
        for level in 0..=255u32 {
            let scaled = lightness_to_luminance(f64::from(level) / 255.0) * 255.0;
            assert_eq!(
                Rounding::HalfAwayFromZero.apply(scaled),
                Rounding::HalfEven.apply(scaled),
                "tie at level {level}: {scaled}"
            );
        }
    }
}
