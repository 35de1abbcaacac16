//! Conversion of fixed-point values between decimal scales.
//!
//! CRITICAL: no floating point. Rescaling runs through `i128` with checked
//! multiplication, and derived literals are exact `Decimal` values. Moving to a
//! smaller scale truncates toward zero; nothing here rounds half-way.

use ledgersplit_shared::Amount;
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ScaleError;

/// Significant digits kept in the canonical rendering of a derived literal.
pub const RENDER_SIGNIFICANT_DIGITS: u32 = 10;

/// Decimal exponent below which the canonical rendering switches to
/// exponent notation (`1.5e-05`).
const EXPONENT_NOTATION_BELOW: i64 = -4;

/// Minimum number of exponent digits in exponent notation (`e-05`).
const MIN_EXPONENT_DIGITS: u32 = 2;

/// Converts `value` expressed at `from_scale` into `to_scale`.
///
/// Computes `value × 10^(to_scale − from_scale)`. Scaling down truncates
/// toward zero, so only a scale-up followed by the matching scale-down is
/// lossless.
///
/// # Example
///
/// ```
/// use ledgersplit_core::scale::rescale;
///
/// assert_eq!(rescale(1050, 2, 4).unwrap(), 105_000);
/// assert_eq!(rescale(1059, 2, 1).unwrap(), 105);
/// assert_eq!(rescale(-1059, 2, 1).unwrap(), -105);
/// ```
pub fn rescale(value: i64, from_scale: u32, to_scale: u32) -> Result<i64, ScaleError> {
    if from_scale == to_scale || value == 0 {
        return Ok(value);
    }

    let overflow = || ScaleError::Overflow {
        value,
        from_scale,
        to_scale,
    };

    if to_scale > from_scale {
        let factor = 10i128
            .checked_pow(to_scale - from_scale)
            .ok_or_else(overflow)?;
        let scaled = i128::from(value)
            .checked_mul(factor)
            .ok_or_else(overflow)?;
        i64::try_from(scaled).map_err(|_| overflow())
    } else {
        match 10i128.checked_pow(from_scale - to_scale) {
            // Integer division truncates toward zero and never grows |value|.
            Some(factor) => i64::try_from(i128::from(value) / factor).map_err(|_| overflow()),
            // Past 10^38 nothing of an i64 survives.
            None => Ok(0),
        }
    }
}

/// Converts a decimal literal into a fixed-point `Amount`.
///
/// The fractional digit count `f` is the length of whatever follows the `.`
/// in the literal's canonical rendering: rounded to
/// [`RENDER_SIGNIFICANT_DIGITS`] significant digits (half-even), trailing
/// zeros dropped. Magnitudes below `1e-4` render in exponent notation, so
/// `0.000015` renders as `1.5e-05` and counts `5e-05` (f = 5), while
/// `0.00001` renders as `1e-05` and has no fraction at all (f = 0).
///
/// - `f == 0`: the value is the literal truncated, at `base_scale`.
/// - `f > 0`: the value is `literal × 10^f` truncated, and the scale is
///   `f + base_scale`. The base scale is counted on top of `f` while the value
///   is only shifted by `f`; existing callers depend on that exact pairing.
///
/// # Example
///
/// ```
/// use ledgersplit_core::scale::derive_scale;
/// use rust_decimal_macros::dec;
///
/// let whole = derive_scale("BRL", dec!(500), 2).unwrap();
/// assert_eq!((whole.value, whole.scale), (500, 2));
///
/// let fractional = derive_scale("BRL", dec!(12.5), 2).unwrap();
/// assert_eq!((fractional.value, fractional.scale), (125, 3));
/// ```
pub fn derive_scale(asset: &str, literal: Decimal, base_scale: u32) -> Result<Amount, ScaleError> {
    let fraction_digits = if literal.is_zero() {
        0
    } else {
        rendered_fraction_len(canonical_rendering(literal)?)
    };

    if fraction_digits == 0 {
        let value = literal
            .trunc()
            .to_i64()
            .ok_or(ScaleError::Unrepresentable {
                literal,
                scale: base_scale,
            })?;
        return Ok(Amount::new(asset, value, base_scale));
    }

    let unrepresentable = || ScaleError::Unrepresentable {
        literal,
        scale: fraction_digits,
    };

    let value = pow10(fraction_digits)
        .and_then(|factor| literal.checked_mul(factor))
        .and_then(|shifted| shifted.trunc().to_i64())
        .ok_or_else(unrepresentable)?;

    // A normalized rendering with f > 0 always has a non-zero fraction.
    let scale = fraction_digits
        .checked_add(base_scale)
        .ok_or_else(unrepresentable)?;

    Ok(Amount::new(asset, value, scale))
}

fn canonical_rendering(literal: Decimal) -> Result<Decimal, ScaleError> {
    literal
        .round_sf_with_strategy(
            RENDER_SIGNIFICANT_DIGITS,
            RoundingStrategy::MidpointNearestEven,
        )
        .map(|rounded| rounded.normalize())
        .ok_or(ScaleError::Unrepresentable { literal, scale: 0 })
}

/// Length of the text after the `.` when `rendered` is written out.
///
/// `rendered` is normalized, so it has no trailing zeros.
fn rendered_fraction_len(rendered: Decimal) -> u32 {
    if rendered.is_zero() {
        return 0;
    }

    let digits = digit_count(rendered.mantissa().unsigned_abs());
    let exponent = i64::from(digits) - 1 - i64::from(rendered.scale());

    if exponent >= EXPONENT_NOTATION_BELOW {
        return rendered.scale();
    }

    // d.ddde-XX: mantissa fraction, then "e-" and the exponent digits.
    let mantissa_fraction = digits - 1;
    if mantissa_fraction == 0 {
        return 0;
    }
    let exponent_digits =
        digit_count(u128::from(exponent.unsigned_abs())).max(MIN_EXPONENT_DIGITS);
    mantissa_fraction + 2 + exponent_digits
}

fn digit_count(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn pow10(exp: u32) -> Option<Decimal> {
    let factor = 10i128.checked_pow(exp)?;
    Decimal::try_from_i128_with_scale(factor, 0).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(1000, 2, 2, 1000)]
    #[case(1000, 2, 4, 100_000)]
    #[case(1000, 0, 3, 1_000_000)]
    #[case(1999, 3, 0, 1)]
    #[case(-1999, 3, 0, -1)]
    #[case(5, 1, 0, 0)]
    #[case(0, 0, 30, 0)]
    fn test_rescale(#[case] value: i64, #[case] from: u32, #[case] to: u32, #[case] expected: i64) {
        assert_eq!(rescale(value, from, to).unwrap(), expected);
    }

    #[test]
    fn test_rescale_overflow_is_error() {
        assert_eq!(
            rescale(i64::MAX, 0, 1),
            Err(ScaleError::Overflow {
                value: i64::MAX,
                from_scale: 0,
                to_scale: 1,
            })
        );
        assert!(rescale(1, 0, 19).is_err());
        assert!(rescale(1, 0, 60).is_err());
    }

    #[test]
    fn test_rescale_far_down_is_zero() {
        assert_eq!(rescale(i64::MAX, 40, 0).unwrap(), 0);
        assert_eq!(rescale(i64::MIN, 19, 0).unwrap(), 0);
    }

    #[test]
    fn test_derive_scale_whole_number_keeps_base_scale() {
        let amount = derive_scale("BRL", dec!(500), 2).unwrap();
        assert_eq!(amount, Amount::new("BRL", 500, 2));
    }

    #[test]
    fn test_derive_scale_trailing_zeros_are_not_fraction() {
        let amount = derive_scale("BRL", dec!(500.000), 2).unwrap();
        assert_eq!(amount, Amount::new("BRL", 500, 2));
    }

    #[test]
    fn test_derive_scale_fraction_counts_base_scale_twice() {
        // 0.5 renders with one fractional digit: value 5, scale 1 + 2.
        let amount = derive_scale("BRL", dec!(0.5), 2).unwrap();
        assert_eq!(amount, Amount::new("BRL", 5, 3));
    }

    #[test]
    fn test_derive_scale_repeating_fraction() {
        // 1000 / 3 renders as 333.3333333 (10 significant digits).
        let literal = dec!(1000) / dec!(3);
        let amount = derive_scale("BRL", literal, 2).unwrap();
        assert_eq!(amount, Amount::new("BRL", 3_333_333_333, 9));
    }

    #[test]
    fn test_derive_scale_rounding_carry_truncates_value() {
        // Rendering rounds up to 100, but the value is the truncated literal.
        let amount = derive_scale("BRL", dec!(99.999999999999), 2).unwrap();
        assert_eq!(amount, Amount::new("BRL", 99, 2));
    }

    #[rstest]
    #[case::smallest_positional(dec!(0.0001), Amount::new("BRL", 1, 6))]
    #[case::positional_fraction(dec!(0.00012), Amount::new("BRL", 12, 7))]
    #[case::exponent_without_fraction(dec!(0.00001), Amount::new("BRL", 0, 2))]
    #[case::exponent_with_fraction(dec!(0.000015), Amount::new("BRL", 1, 7))]
    #[case::negative_exponent(dec!(-0.000015), Amount::new("BRL", -1, 7))]
    #[case::rounds_up_to_positional(dec!(0.000099999999999), Amount::new("BRL", 0, 6))]
    #[case::long_mantissa(dec!(0.0000123), Amount::new("BRL", 12, 8))]
    fn test_derive_scale_small_magnitudes(#[case] literal: Decimal, #[case] expected: Amount) {
        assert_eq!(derive_scale("BRL", literal, 2).unwrap(), expected);
    }

    #[rstest]
    #[case(dec!(0.0001), 4)]
    #[case(dec!(0.00001), 0)]
    #[case(dec!(0.000015), 5)]
    #[case(dec!(0.0000123), 6)]
    #[case(dec!(12.5), 1)]
    #[case(dec!(500), 0)]
    fn test_rendered_fraction_len(#[case] literal: Decimal, #[case] expected: u32) {
        let rendered = canonical_rendering(literal).unwrap();
        assert_eq!(rendered_fraction_len(rendered), expected);
    }

    #[test]
    fn test_derive_scale_negative_literal() {
        let amount = derive_scale("BRL", dec!(-12.25), 0).unwrap();
        assert_eq!(amount, Amount::new("BRL", -1225, 2));
    }

    #[test]
    fn test_derive_scale_zero() {
        let amount = derive_scale("BRL", Decimal::ZERO, 4).unwrap();
        assert_eq!(amount, Amount::new("BRL", 0, 4));
    }

    #[test]
    fn test_derive_scale_unrepresentable() {
        let literal = Decimal::from(i64::MAX) * dec!(10);
        assert!(matches!(
            derive_scale("BRL", literal, 0),
            Err(ScaleError::Unrepresentable { .. })
        ));
    }
}
