//! Scale arithmetic errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Arithmetic overflow while moving values between decimal scales.
///
/// These are never retryable: the same input always overflows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Rescaled value does not fit in 64 bits.
    #[error("Value {value} overflows when rescaled from scale {from_scale} to {to_scale}")]
    Overflow {
        /// Value being rescaled.
        value: i64,
        /// Scale the value is expressed at.
        from_scale: u32,
        /// Requested scale.
        to_scale: u32,
    },

    /// Running total or remainder left the 64-bit range.
    #[error("Accumulated amount overflows")]
    AccumulatorOverflow,

    /// A derived literal cannot be expressed as a 64-bit value at its scale.
    #[error("Value {literal} cannot be represented at scale {scale}")]
    Unrepresentable {
        /// The decimal literal being converted.
        literal: Decimal,
        /// Fractional digits the literal required.
        scale: u32,
    },

    /// Share ratio could not be computed.
    #[error("Share {percentage}/{denominator} of {value} overflows")]
    RatioOverflow {
        /// Base value.
        value: i64,
        /// Share percentage.
        percentage: i64,
        /// Effective denominator.
        denominator: i64,
    },
}
