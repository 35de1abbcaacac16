//! Per-side allocation of a split request.
//!
//! This module implements:
//! - Request and entry domain types
//! - The allocation mechanisms an entry can resolve through
//! - The allocation engine producing per-account amounts and a side total

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::AllocationEngine;
pub use error::AllocationError;
pub use types::{AccountEntry, Allocation, AllocationResult, Distribute, Source, SplitRequest};
