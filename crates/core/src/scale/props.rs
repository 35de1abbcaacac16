//! Property-based tests for scale normalization.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::normalizer::{derive_scale, rescale};

/// Strategy to generate values that survive a scale-up of up to 6 digits.
fn safe_value() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rescaling to the same scale is the identity.
    #[test]
    fn prop_rescale_identity(value in any::<i64>(), scale in 0u32..40) {
        prop_assert_eq!(rescale(value, scale, scale).unwrap(), value);
    }

    /// Scaling up then back down returns the starting value.
    #[test]
    fn prop_scale_up_then_down_is_lossless(
        value in safe_value(),
        from in 0u32..10,
        extra in 0u32..=6,
    ) {
        let to = from + extra;
        let up = rescale(value, from, to).unwrap();
        prop_assert_eq!(rescale(up, to, from).unwrap(), value);
    }

    /// Scaling down never grows the magnitude and keeps the sign (or hits zero).
    #[test]
    fn prop_scale_down_truncates_toward_zero(
        value in any::<i64>(),
        to in 0u32..10,
        drop in 1u32..10,
    ) {
        let down = rescale(value, to + drop, to).unwrap();
        prop_assert!(down.unsigned_abs() <= value.unsigned_abs());
        prop_assert!(down == 0 || down.signum() == value.signum());
    }

    /// Whole literals keep the base scale and their integer value.
    #[test]
    fn prop_derive_scale_whole_literal(value in -999_999_999i64..999_999_999, base in 0u32..8) {
        let amount = derive_scale("BRL", Decimal::from(value), base).unwrap();
        prop_assert_eq!(amount.value, value);
        prop_assert_eq!(amount.scale, base);
    }
}
