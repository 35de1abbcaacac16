//! Core split validation logic for Ledgersplit.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It proves that a proposed double-entry split is arithmetically and
//! structurally consistent before the transaction is committed.
//!
//! # Modules
//!
//! - `scale` - Fixed-point conversion between decimal scales
//! - `share` - Percentage share resolution
//! - `allocation` - Per-side allocation of account entries
//! - `validation` - Cross-side reconciliation
//!
//! # Example
//!
//! ```
//! use ledgersplit_core::allocation::{AccountEntry, SplitRequest};
//! use ledgersplit_core::validation::validate;
//! use ledgersplit_shared::Amount;
//!
//! let request = SplitRequest::new("BRL", 1000, 2)
//!     .with_sources(vec![AccountEntry::new("@a").with_amount(Amount::new("BRL", 1000, 2))])
//!     .with_destinations(vec![AccountEntry::new("@b").with_amount(Amount::new("BRL", 1000, 2))]);
//!
//! let response = validate(&request).unwrap();
//! assert_eq!(response.aliases, vec!["@a", "@b"]);
//! ```

pub mod allocation;
pub mod scale;
pub mod share;
pub mod validation;

pub use allocation::{AccountEntry, AllocationEngine, AllocationResult, SplitRequest};
pub use validation::{SplitValidationError, SplitValidator, ValidatedResponse, validate};
