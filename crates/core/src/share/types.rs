//! Percentage share definition.

use serde::{Deserialize, Serialize};

/// Denominator used when `percentage_of_percentage` is left at zero.
pub const DEFAULT_DENOMINATOR: i64 = 100;

/// A percentage-based allocation rule.
///
/// The effective fraction is `percentage / percentage_of_percentage`, where a
/// zero `percentage_of_percentage` means a plain percentage (`/ 100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Share numerator.
    #[serde(default)]
    pub percentage: i64,
    /// Share denominator (0 means 100).
    #[serde(default)]
    pub percentage_of_percentage: i64,
}

impl Share {
    /// Creates a share of `percentage` over `percentage_of_percentage`.
    #[must_use]
    pub const fn new(percentage: i64, percentage_of_percentage: i64) -> Self {
        Self {
            percentage,
            percentage_of_percentage,
        }
    }

    /// Returns the effective denominator.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        if self.percentage_of_percentage == 0 {
            DEFAULT_DENOMINATOR
        } else {
            self.percentage_of_percentage
        }
    }

    /// Returns true if this share contributes to an allocation.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.percentage != 0
    }
}
