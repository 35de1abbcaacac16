//! Split validation error types.
//!
//! The three mismatch causes stay distinguishable here, while callers that
//! must keep the historical wire behavior can present a single message via
//! [`SplitValidationError::public_message`].

use ledgersplit_shared::AppError;
use thiserror::Error;

use crate::allocation::AllocationError;
use crate::scale::ScaleError;

/// Message shown for every mismatch cause.
pub const MISMATCH_MESSAGE: &str =
    "transaction value mismatch when validate send, source and distribute structs";

/// Errors that reject a split request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitValidationError {
    // ========== Mismatch Errors ==========
    /// An account takes part on both sides of the split.
    #[error("Account {account} appears on both the source and destination side")]
    SharedAccount {
        /// The account found on both sides.
        account: String,
    },

    /// Source side does not add up to the declared value.
    #[error("Source total {sources} does not match declared value {declared}")]
    SourceTotalMismatch {
        /// Declared transaction value.
        declared: i64,
        /// Computed source total.
        sources: i64,
    },

    /// Source and destination sides do not add up to the same total.
    #[error("Source total {sources} does not match destination total {destinations}")]
    SideTotalMismatch {
        /// Computed source total.
        sources: i64,
        /// Computed destination total.
        destinations: i64,
    },

    // ========== Allocation Errors ==========
    /// A side could not be allocated.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl SplitValidationError {
    /// Returns true for the value mismatch causes.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Self::SharedAccount { .. }
                | Self::SourceTotalMismatch { .. }
                | Self::SideTotalMismatch { .. }
        )
    }

    /// Returns a stable machine readable code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SharedAccount { .. } => "SHARED_ACCOUNT",
            Self::SourceTotalMismatch { .. } => "SOURCE_TOTAL_MISMATCH",
            Self::SideTotalMismatch { .. } => "SIDE_TOTAL_MISMATCH",
            Self::Allocation(AllocationError::AmbiguousEntry { .. }) => "AMBIGUOUS_ALLOCATION",
            Self::Allocation(AllocationError::Scale(_)) => "ARITHMETIC_OVERFLOW",
        }
    }

    /// Message for external callers; all mismatch causes share one text.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_mismatch() {
            MISMATCH_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<ScaleError> for SplitValidationError {
    fn from(err: ScaleError) -> Self {
        Self::Allocation(AllocationError::Scale(err))
    }
}

impl From<SplitValidationError> for AppError {
    fn from(err: SplitValidationError) -> Self {
        if err.is_mismatch() {
            Self::BusinessRule(err.public_message())
        } else {
            Self::Validation(err.public_message())
        }
    }
}
