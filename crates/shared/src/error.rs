//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// This is the shape a surrounding service reports to its callers; the
/// detailed domain errors convert into it.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error (the request cannot be processed as given).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::Config(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Config(_) => "CONFIGURATION_ERROR",
        }
    }
}
