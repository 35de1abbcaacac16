//! Property-based tests for split validation.
//!
//! - Mirrored fixed-amount splits always validate
//! - Accounts on both sides are always rejected
//! - Parallel and sequential side allocation agree

use ledgersplit_shared::{AllocationMode, Amount, ValidationConfig};
use proptest::prelude::*;

use super::error::SplitValidationError;
use super::service::SplitValidator;
use crate::allocation::{AccountEntry, SplitRequest};

/// Strategy to generate positive amounts in cents (0.01 to 10,000.00).
fn positive_cents() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

fn side(prefix: &str, values: &[i64], scale: u32) -> Vec<AccountEntry> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            AccountEntry::new(format!("@{prefix}{i}"))
                .with_amount(Amount::new("BRL", *value, scale))
        })
        .collect()
}

fn mirrored(values: &[i64], scale: u32) -> SplitRequest {
    SplitRequest::new("BRL", values.iter().sum(), scale)
        .with_sources(side("src", values, scale))
        .with_destinations(side("dst", values, scale))
}

fn validator(parallel_sides: bool) -> SplitValidator {
    SplitValidator::new(&ValidationConfig {
        parallel_sides,
        allocation_mode: AllocationMode::Compatible,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* split whose sides mirror each other with fixed amounts that
    /// sum to the declared value, validation SHALL succeed.
    #[test]
    fn prop_mirrored_fixed_split_validates(
        values in prop::collection::vec(positive_cents(), 1..10),
        scale in 0u32..6,
    ) {
        let request = mirrored(&values, scale);
        let response = validator(true).validate(&request).unwrap();

        prop_assert_eq!(response.total, request.value);
        prop_assert_eq!(response.aliases.len(), values.len() * 2);
    }

    /// *For any* split listing one account on both sides, validation SHALL
    /// fail with a shared-account mismatch, whatever the amounts.
    #[test]
    fn prop_shared_account_rejected(
        values in prop::collection::vec(positive_cents(), 1..6),
        pick in any::<prop::sample::Index>(),
        other in positive_cents(),
    ) {
        let mut request = mirrored(&values, 2);
        let idx = pick.index(values.len());
        let account = request.sources()[idx].account.clone();
        request.distribute.to[idx] = AccountEntry::new(account.clone())
            .with_amount(Amount::new("BRL", other, 2));

        let result = validator(true).validate(&request);
        prop_assert_eq!(result, Err(SplitValidationError::SharedAccount { account }));
    }

    /// *For any* request, parallel and sequential side allocation SHALL give
    /// the same outcome.
    #[test]
    fn prop_parallel_matches_sequential(
        sources in prop::collection::vec(positive_cents(), 0..6),
        destinations in prop::collection::vec(positive_cents(), 0..6),
        declared in positive_cents(),
    ) {
        let request = SplitRequest::new("BRL", declared, 2)
            .with_sources(side("src", &sources, 2))
            .with_destinations(side("dst", &destinations, 2));

        prop_assert_eq!(
            validator(true).validate(&request),
            validator(false).validate(&request)
        );
    }
}
