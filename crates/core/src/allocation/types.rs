//! Split request domain types.
//!
//! A `SplitRequest` declares a total and two ordered lists of account entries,
//! one per side. Shape validation (required fields, lengths, metadata limits)
//! happens upstream; these types only carry the data.

use std::collections::HashMap;

use ledgersplit_shared::Amount;
use serde::{Deserialize, Serialize};

use crate::share::Share;

/// Marker tokens that count as "no marker".
const UNSET_MARKERS: [&str; 2] = ["null", "nil"];

/// One participant on the source or destination side of a split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntry {
    /// Account identifier (alias), e.g. `@person1`.
    pub account: String,
    /// Fixed amount allocated to this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Percentage share of the request total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<Share>,
    /// Remaining marker. An unset marker makes this entry absorb whatever is
    /// left unallocated (see [`AccountEntry::is_remainder_account`]).
    #[serde(default)]
    pub remaining: String,
    /// Free text description.
    #[serde(default)]
    pub description: String,
    /// Chart of accounts code.
    #[serde(default)]
    pub chart_of_accounts: String,
    /// Flat metadata, already size-checked upstream.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    /// Whether this entry sits on the source side.
    #[serde(default)]
    pub is_from: bool,
}

/// Allocation mechanism an entry resolves through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// Percentage of the request total.
    Share(Share),
    /// Fixed amount at its own scale and asset.
    Fixed(Amount),
    /// Whatever is still unallocated when the entry is reached.
    Remainder,
}

impl Allocation {
    /// Short name used in logs and errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Share(_) => "share",
            Self::Fixed(_) => "amount",
            Self::Remainder => "remaining",
        }
    }
}

impl AccountEntry {
    /// Creates an entry for `account` with a marker set and nothing allocated.
    #[must_use]
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            remaining: "remaining".to_string(),
            ..Self::default()
        }
    }

    /// Sets a fixed amount.
    #[must_use]
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets a percentage share.
    #[must_use]
    pub fn with_share(mut self, share: Share) -> Self {
        self.share = Some(share);
        self
    }

    /// Sets the remaining marker.
    #[must_use]
    pub fn with_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.remaining = remaining.into();
        self
    }

    /// Returns true if this entry absorbs the unallocated remainder.
    ///
    /// That is the case when the marker is empty, whitespace, `"null"` or
    /// `"nil"` once trimmed.
    #[must_use]
    pub fn is_remainder_account(&self) -> bool {
        let marker = self.remaining.trim();
        marker.is_empty() || UNSET_MARKERS.contains(&marker)
    }

    /// Returns every mechanism this entry matches, in application order.
    ///
    /// Share first, then a positive fixed amount, then the remainder. More
    /// than one element means the entry contributes more than once.
    #[must_use]
    pub fn allocations(&self) -> Vec<Allocation> {
        let mut allocations = Vec::with_capacity(1);

        if let Some(share) = self.share.filter(Share::is_active) {
            allocations.push(Allocation::Share(share));
        }
        if let Some(amount) = self.amount.as_ref().filter(|a| a.value > 0) {
            allocations.push(Allocation::Fixed(amount.clone()));
        }
        if self.is_remainder_account() {
            allocations.push(Allocation::Remainder);
        }

        allocations
    }
}

/// Source side of a split: the accounts money is taken from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Side-level remaining marker, carried for the caller.
    #[serde(default)]
    pub remaining: String,
    /// Source entries, in order.
    pub from: Vec<AccountEntry>,
}

/// Destination side of a split: the accounts money goes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribute {
    /// Side-level remaining marker, carried for the caller.
    #[serde(default)]
    pub remaining: String,
    /// Destination entries, in order.
    pub to: Vec<AccountEntry>,
}

/// A transaction split to validate.
///
/// Both sides are required on the wire; a payload without `source.from` or
/// `distribute.to` fails to deserialize instead of yielding empty sides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    /// Asset code of the declared total.
    pub asset: String,
    /// Declared total in units of `10^-scale`.
    pub value: i64,
    /// Scale of the declared total.
    #[serde(default)]
    pub scale: u32,
    /// Source side.
    pub source: Source,
    /// Destination side.
    pub distribute: Distribute,
}

impl SplitRequest {
    /// Creates a request for `value` at `scale` with no entries.
    #[must_use]
    pub fn new(asset: impl Into<String>, value: i64, scale: u32) -> Self {
        Self {
            asset: asset.into(),
            value,
            scale,
            ..Self::default()
        }
    }

    /// Sets the source entries.
    #[must_use]
    pub fn with_sources(mut self, entries: Vec<AccountEntry>) -> Self {
        self.source.from = entries;
        self
    }

    /// Sets the destination entries.
    #[must_use]
    pub fn with_destinations(mut self, entries: Vec<AccountEntry>) -> Self {
        self.distribute.to = entries;
        self
    }

    /// Source entries, in order.
    #[must_use]
    pub fn sources(&self) -> &[AccountEntry] {
        &self.source.from
    }

    /// Destination entries, in order.
    #[must_use]
    pub fn destinations(&self) -> &[AccountEntry] {
        &self.distribute.to
    }

    /// Returns the declared total as an `Amount`.
    #[must_use]
    pub fn total(&self) -> Amount {
        Amount::new(self.asset.clone(), self.value, self.scale)
    }
}

/// Outcome of allocating one side of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    /// Side total, rescaled down to the request scale when it ended up finer.
    pub total: Amount,
    /// Amount allocated to each account (last write wins).
    pub per_account: HashMap<String, Amount>,
    /// Account identifiers in entry order, duplicates preserved.
    pub order: Vec<String>,
}
