//! Cross-side validation of a split request.
//!
//! Allocates the source and destination sides independently, then checks
//! that no account sits on both sides and that both sides add up to the
//! declared value.

use ledgersplit_shared::{AppConfig, ValidationConfig};
use tracing::{Span, debug, instrument, warn};

use super::error::SplitValidationError;
use super::types::ValidatedResponse;
use crate::allocation::{
    AccountEntry, AllocationEngine, AllocationError, AllocationResult, SplitRequest,
};

/// Split validation service.
///
/// Holds only policy; every call works on its own request and allocates
/// fresh results, so one validator can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct SplitValidator {
    engine: AllocationEngine,
    parallel_sides: bool,
}

impl SplitValidator {
    /// Creates a validator from the validation settings.
    #[must_use]
    pub const fn new(config: &ValidationConfig) -> Self {
        Self {
            engine: AllocationEngine::new(config.allocation_mode),
            parallel_sides: config.parallel_sides,
        }
    }

    /// Creates a validator from the application configuration.
    #[must_use]
    pub const fn from_app_config(config: &AppConfig) -> Self {
        Self::new(&config.validation)
    }

    /// Validate a split request.
    ///
    /// This function performs all validation steps:
    /// 1. Allocates the source and destination sides (concurrently when configured)
    /// 2. Rejects accounts that appear on both sides
    /// 3. Checks the source total against the declared value
    /// 4. Checks the source total against the destination total
    ///
    /// # Errors
    ///
    /// Returns `SplitValidationError` if validation fails.
    #[instrument(
        name = "validate_split",
        skip_all,
        fields(asset = %request.asset, value = request.value, scale = request.scale)
    )]
    pub fn validate(&self, request: &SplitRequest) -> Result<ValidatedResponse, SplitValidationError> {
        let (sources, destinations) = self.allocate_sides(request);
        let sources = sources.map_err(|e| reject(e.into()))?;
        let destinations = destinations.map_err(|e| reject(e.into()))?;

        if let Some(account) = shared_account(&sources, &destinations) {
            return Err(reject(SplitValidationError::SharedAccount {
                account: account.to_string(),
            }));
        }

        if sources.total.value != request.value {
            return Err(reject(SplitValidationError::SourceTotalMismatch {
                declared: request.value,
                sources: sources.total.value,
            }));
        }

        if sources.total.value != destinations.total.value {
            return Err(reject(SplitValidationError::SideTotalMismatch {
                sources: sources.total.value,
                destinations: destinations.total.value,
            }));
        }

        debug!(
            sources = sources.order.len(),
            destinations = destinations.order.len(),
            "Split validated"
        );

        let aliases = sources
            .order
            .iter()
            .chain(destinations.order.iter())
            .cloned()
            .collect();

        Ok(ValidatedResponse {
            total: request.value,
            asset: request.asset.clone(),
            from: sources.per_account,
            to: destinations.per_account,
            sources: sources.order,
            destinations: destinations.order,
            aliases,
        })
    }

    fn allocate_sides(&self, request: &SplitRequest) -> (SideResult, SideResult) {
        let engine = self.engine;
        let allocate = |entries: &[AccountEntry]| engine.allocate(entries, request);

        if self.parallel_sides {
            let span = Span::current();
            rayon::join(
                || span.in_scope(|| allocate(request.sources())),
                || span.in_scope(|| allocate(request.destinations())),
            )
        } else {
            (allocate(request.sources()), allocate(request.destinations()))
        }
    }
}

impl Default for SplitValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

type SideResult = Result<AllocationResult, AllocationError>;

/// Validates `request` with the default configuration.
///
/// # Errors
///
/// Returns `SplitValidationError` if validation fails.
pub fn validate(request: &SplitRequest) -> Result<ValidatedResponse, SplitValidationError> {
    SplitValidator::default().validate(request)
}

/// First account of either side that was allocated on the other side.
fn shared_account<'a>(
    sources: &'a AllocationResult,
    destinations: &'a AllocationResult,
) -> Option<&'a str> {
    sources
        .order
        .iter()
        .find(|account| destinations.per_account.contains_key(*account))
        .or_else(|| {
            destinations
                .order
                .iter()
                .find(|account| sources.per_account.contains_key(*account))
        })
        .map(String::as_str)
}

fn reject(err: SplitValidationError) -> SplitValidationError {
    warn!(code = err.error_code(), error = %err, "Split rejected");
    err
}
