//! Allocation error types.

use thiserror::Error;

use crate::scale::ScaleError;

/// Errors that can occur while allocating one side of a split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Arithmetic overflow while aligning scales.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Entry matches several allocation mechanisms under exclusive mode.
    #[error("Account {account} matches {} allocation mechanisms: {}", .mechanisms.len(), .mechanisms.join(", "))]
    AmbiguousEntry {
        /// The offending account.
        account: String,
        /// Mechanism names, in application order.
        mechanisms: Vec<&'static str>,
    },
}
