use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Balance used for a profile that has never been initialized.
pub const DEFAULT_INITIAL_BALANCE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// The persisted ledger of one browser profile.
///
/// Both fields are written together on every successful redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Coin balance, never negative
    pub balance: Decimal,

    /// Uppercased codes already redeemed. Grows monotonically.
    pub applied_codes: BTreeSet<String>,
}

impl LedgerState {
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance,
            applied_codes: BTreeSet::new(),
        }
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_BALANCE)
    }
}

/// Result of a successful promo redemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redemption {
    pub code: String,
    pub new_balance: Decimal,
    pub message: String,
}
