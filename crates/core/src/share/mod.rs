//! Percentage share definitions and their resolution against a total.

pub mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{DEFAULT_DENOMINATOR, Share};
