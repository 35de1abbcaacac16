//! Allocation of one side of a split.
//!
//! Entries are walked in order while a running total and the still
//! unallocated remainder are carried along. Both may change scale as finer
//! amounts arrive; every combination aligns scales first.

use std::collections::HashMap;

use ledgersplit_shared::{AllocationMode, Amount};
use tracing::{debug, trace};

use super::error::AllocationError;
use super::types::{AccountEntry, Allocation, AllocationResult, SplitRequest};
use crate::scale::{ScaleError, rescale};
use crate::share;

/// Engine for allocating the entries of one side of a split.
///
/// Stateless apart from its policy; a single engine can serve any number of
/// requests concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationEngine {
    mode: AllocationMode,
}

impl AllocationEngine {
    /// Creates an engine with the given mechanism policy.
    #[must_use]
    pub const fn new(mode: AllocationMode) -> Self {
        Self { mode }
    }

    /// Returns the mechanism policy.
    #[must_use]
    pub const fn mode(&self) -> AllocationMode {
        self.mode
    }

    /// Allocates `entries` against the total declared by `request`.
    ///
    /// For each entry, every matching mechanism is applied in order:
    /// 1. Share: a percentage of the request total
    /// 2. Fixed amount: the entry's own amount, at its own scale
    /// 3. Remainder: whatever is still unallocated at that point
    ///
    /// The account's recorded amount is the last one applied. Every entry's
    /// account is appended to the order, allocated or not.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::Scale` on arithmetic overflow, and
    /// `AllocationError::AmbiguousEntry` when an entry matches several
    /// mechanisms under `AllocationMode::Exclusive`.
    pub fn allocate(
        &self,
        entries: &[AccountEntry],
        request: &SplitRequest,
    ) -> Result<AllocationResult, AllocationError> {
        let base = request.total();
        let mut ledger = RunningLedger::new(request);
        let mut per_account = HashMap::with_capacity(entries.len());
        let mut order = Vec::with_capacity(entries.len());

        for entry in entries {
            let allocations = entry.allocations();

            if self.mode == AllocationMode::Exclusive && allocations.len() > 1 {
                return Err(AllocationError::AmbiguousEntry {
                    account: entry.account.clone(),
                    mechanisms: allocations.iter().map(Allocation::kind).collect(),
                });
            }

            for allocation in allocations {
                let mechanism = allocation.kind();
                let amount = match allocation {
                    Allocation::Share(rule) => match share::resolve(&base, &rule)? {
                        Some(amount) => ledger.merge(amount)?,
                        None => continue,
                    },
                    Allocation::Fixed(amount) => ledger.merge(amount)?,
                    Allocation::Remainder => ledger.absorb()?,
                };

                trace!(
                    account = %entry.account,
                    mechanism,
                    amount = %amount,
                    "Entry allocated"
                );
                per_account.insert(entry.account.clone(), amount);
            }

            order.push(entry.account.clone());
        }

        let total = ledger.into_total(request.scale)?;
        debug!(
            entries = entries.len(),
            total = total.value,
            scale = total.scale,
            "Side allocated"
        );

        Ok(AllocationResult {
            total,
            per_account,
            order,
        })
    }
}

/// Running total and outstanding remainder for one pass.
struct RunningLedger {
    total: Amount,
    remainder: Amount,
}

impl RunningLedger {
    fn new(request: &SplitRequest) -> Self {
        Self {
            total: Amount::zero(request.asset.clone()),
            remainder: request.total(),
        }
    }

    /// Adds `amount` to the total and takes it out of the remainder.
    ///
    /// Returns the amount as recorded, which is rescaled to the total's scale
    /// when the total was already finer and non-zero.
    fn merge(&mut self, mut amount: Amount) -> Result<Amount, ScaleError> {
        accumulate(&mut self.total, &mut amount)?;
        deduct(&mut self.remainder, &amount)?;
        Ok(amount)
    }

    /// Adds the current remainder to the total and returns it.
    ///
    /// The remainder itself is left untouched, so a later remainder entry
    /// absorbs the same outstanding value again.
    fn absorb(&mut self) -> Result<Amount, ScaleError> {
        let absorbed = self.remainder.clone();
        accumulate(&mut self.total, &mut self.remainder.clone())?;
        Ok(absorbed)
    }

    /// Final total, truncated down to `scale` if it ended up finer.
    fn into_total(self, scale: u32) -> Result<Amount, ScaleError> {
        let mut total = self.total;
        if total.scale > scale {
            total.value = rescale(total.value, total.scale, scale)?;
            total.scale = scale;
        }
        Ok(total)
    }
}

fn accumulate(total: &mut Amount, amount: &mut Amount) -> Result<(), ScaleError> {
    if total.scale < amount.scale {
        let aligned = rescale(total.value, total.scale, amount.scale)?;
        total.value = checked_add(aligned, amount.value)?;
        total.scale = amount.scale;
    } else if !total.is_zero() {
        amount.value = rescale(amount.value, amount.scale, total.scale)?;
        amount.scale = total.scale;
        total.value = checked_add(total.value, amount.value)?;
    } else {
        total.value = amount.value;
        total.scale = amount.scale;
    }
    Ok(())
}

fn deduct(remainder: &mut Amount, amount: &Amount) -> Result<(), ScaleError> {
    if remainder.scale < amount.scale {
        let aligned = rescale(remainder.value, remainder.scale, amount.scale)?;
        remainder.value = checked_sub(aligned, amount.value)?;
        remainder.scale = amount.scale;
    } else {
        let aligned = rescale(amount.value, amount.scale, remainder.scale)?;
        remainder.value = checked_sub(remainder.value, aligned)?;
    }
    Ok(())
}

fn checked_add(a: i64, b: i64) -> Result<i64, ScaleError> {
    a.checked_add(b).ok_or(ScaleError::AccumulatorOverflow)
}

fn checked_sub(a: i64, b: i64) -> Result<i64, ScaleError> {
    a.checked_sub(b).ok_or(ScaleError::AccumulatorOverflow)
}
