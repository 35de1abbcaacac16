//! Fixed-point amount type with an explicit decimal scale.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! An `Amount` is an integer `value` interpreted as `value / 10^scale`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount as an integer at a given decimal scale.
///
/// Two amounts are only comparable after their scales have been aligned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// Asset code (e.g., "BRL", "USD").
    #[serde(default)]
    pub asset: String,
    /// The amount in units of `10^-scale`.
    #[serde(default)]
    pub value: i64,
    /// Number of implied decimal digits.
    #[serde(default)]
    pub scale: u32,
}

impl Amount {
    /// Creates a new Amount instance.
    #[must_use]
    pub fn new(asset: impl Into<String>, value: i64, scale: u32) -> Self {
        Self {
            asset: asset.into(),
            value,
            scale,
        }
    }

    /// Creates a zero amount at scale 0 in the specified asset.
    #[must_use]
    pub fn zero(asset: impl Into<String>) -> Self {
        Self::new(asset, 0, 0)
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Returns the exact decimal this amount represents.
    ///
    /// `None` when the scale exceeds what `Decimal` can hold (28).
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::try_from_i128_with_scale(i128::from(self.value), self.scale).ok()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_decimal() {
            Some(decimal) => write!(f, "{decimal} {}", self.asset),
            None => write!(f, "{}e-{} {}", self.value, self.scale, self.asset),
        }
    }
}
