//! Scale normalization for fixed-point values.
//!
//! - `rescale` moves an integer value between decimal scales
//! - `derive_scale` turns an exact decimal literal back into fixed-point form

pub mod error;
pub mod normalizer;

#[cfg(test)]
mod props;

pub use error::ScaleError;
pub use normalizer::{RENDER_SIGNIFICANT_DIGITS, derive_scale, rescale};
