//! Cross-side split validation.
//!
//! This module implements:
//! - The validated response returned to callers
//! - Error types distinguishing each mismatch cause
//! - The split validator reconciling both sides against the declared value

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::{MISMATCH_MESSAGE, SplitValidationError};
pub use service::{SplitValidator, validate};
pub use types::ValidatedResponse;
