//! Shared types, errors, and configuration for Ledgersplit.
//!
//! This crate provides common pieces used across the workspace:
//! - Fixed-point `Amount` type with an explicit scale
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{AllocationMode, AppConfig, LoggingConfig, ValidationConfig};
pub use error::AppError;
pub use types::Amount;
