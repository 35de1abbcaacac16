//! Share resolution against a base total.

use ledgersplit_shared::Amount;
use rust_decimal::Decimal;

use super::types::Share;
use crate::scale::{ScaleError, derive_scale};

/// Computes the fixed-point amount a share takes out of `total`.
///
/// Returns `Ok(None)` when the share has a zero percentage and therefore does
/// not contribute. The ratio `total.value × percentage / denominator` is
/// computed exactly and converted with [`derive_scale`], so the returned
/// scale may differ from `total.scale`.
///
/// # Example
///
/// ```
/// use ledgersplit_core::share::{Share, resolve};
/// use ledgersplit_shared::Amount;
///
/// let total = Amount::new("BRL", 1000, 2);
/// let half = resolve(&total, &Share::new(50, 100)).unwrap().unwrap();
/// assert_eq!((half.value, half.scale), (500, 2));
/// ```
pub fn resolve(total: &Amount, share: &Share) -> Result<Option<Amount>, ScaleError> {
    if !share.is_active() {
        return Ok(None);
    }

    let denominator = share.denominator();
    let raw = Decimal::from(total.value)
        .checked_mul(Decimal::from(share.percentage))
        .and_then(|product| product.checked_div(Decimal::from(denominator)))
        .ok_or(ScaleError::RatioOverflow {
            value: total.value,
            percentage: share.percentage,
            denominator,
        })?;

    derive_scale(&total.asset, raw, total.scale).map(Some)
}
