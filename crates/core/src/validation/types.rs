//! Validated split response.

use std::collections::HashMap;

use ledgersplit_shared::Amount;
use serde::{Deserialize, Serialize};

/// Result of a successful split validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedResponse {
    /// Declared transaction value.
    pub total: i64,
    /// Declared asset.
    pub asset: String,
    /// Amount allocated to each source account.
    pub from: HashMap<String, Amount>,
    /// Amount allocated to each destination account.
    pub to: HashMap<String, Amount>,
    /// Source accounts in entry order.
    pub sources: Vec<String>,
    /// Destination accounts in entry order.
    pub destinations: Vec<String>,
    /// Sources followed by destinations.
    pub aliases: Vec<String>,
}
