//! Property-based tests for the allocation engine.

use ledgersplit_shared::Amount;
use proptest::prelude::*;

use super::engine::AllocationEngine;
use super::types::{AccountEntry, SplitRequest};

/// Strategy to generate positive fixed amounts (0.01 to 10,000.00).
fn positive_cents() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

fn fixed_entries(values: &[i64], scale: u32) -> Vec<AccountEntry> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            AccountEntry::new(format!("@acc{i}")).with_amount(Amount::new("BRL", *value, scale))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Fixed amounts at the request scale sum exactly.
    #[test]
    fn prop_fixed_amounts_sum(
        values in prop::collection::vec(positive_cents(), 1..10),
        scale in 0u32..6,
    ) {
        let request = SplitRequest::new("BRL", values.iter().sum(), scale);
        let result = AllocationEngine::default()
            .allocate(&fixed_entries(&values, scale), &request)
            .unwrap();

        prop_assert_eq!(result.total, Amount::new("BRL", request.value, scale));
        prop_assert_eq!(result.order.len(), values.len());
    }

    /// A trailing remainder entry always closes the side to the declared total.
    #[test]
    fn prop_remainder_closes_total(
        values in prop::collection::vec(positive_cents(), 0..8),
        slack in 0i64..1_000_000,
    ) {
        let declared: i64 = values.iter().sum::<i64>() + slack;
        let request = SplitRequest::new("BRL", declared, 2);
        let mut entries = fixed_entries(&values, 2);
        entries.push(AccountEntry::new("@rest").with_remaining(""));

        let result = AllocationEngine::default().allocate(&entries, &request).unwrap();

        prop_assert_eq!(result.total.value, declared);
        prop_assert_eq!(&result.per_account["@rest"], &Amount::new("BRL", slack, 2));
    }

    /// Amounts expressed at a coarser scale than the request line up exactly.
    #[test]
    fn prop_coarser_amounts_align(
        units in prop::collection::vec(1i64..10_000, 1..6),
    ) {
        // Each unit is whole currency (scale 0); the request is in cents.
        let declared: i64 = units.iter().sum::<i64>() * 100;
        let request = SplitRequest::new("BRL", declared, 2);
        let mut entries = fixed_entries(&units, 0);
        // A finer trailing entry forces the total to realign.
        entries.push(AccountEntry::new("@cents").with_amount(Amount::new("BRL", 1, 2)));
        let request = SplitRequest { value: declared + 1, ..request };

        let result = AllocationEngine::default().allocate(&entries, &request).unwrap();

        prop_assert_eq!(result.total, Amount::new("BRL", declared + 1, 2));
    }
}
