use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::ledger::LedgerState;
use crate::models::promo::normalize_code;

use super::traits::KeyValueStore;

/// Default key prefix, matching the web app's localStorage keys.
pub const DEFAULT_NAMESPACE: &str = "cryptoDapper";

const BALANCE_KEY: &str = "MockBalance";
const APPLIED_CODES_KEY: &str = "AppliedPromoCodes";
const PROGRESS_KEY: &str = "TutorialProgress";

/// Result of loading a persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    /// Nothing persisted yet for this profile
    FirstRun,
    Existing(T),
}

impl<T> LoadOutcome<T> {
    pub fn is_first_run(&self) -> bool {
        matches!(self, LoadOutcome::FirstRun)
    }
}

/// Typed access to a profile's persisted ledger and tutorial progress.
///
/// Flow: typed state ⇄ JSON / numeric string ⇄ namespaced key in the store.
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl std::fmt::Debug for ProfileRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileRepository")
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn with_default_namespace(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_NAMESPACE)
    }

    pub fn balance_key(&self) -> String {
        format!("{}{BALANCE_KEY}", self.namespace)
    }

    pub fn applied_codes_key(&self) -> String {
        format!("{}{APPLIED_CODES_KEY}", self.namespace)
    }

    pub fn progress_key(&self) -> String {
        format!("{}{PROGRESS_KEY}", self.namespace)
    }

    // ── Ledger ──────────────────────────────────────────────────────

    /// Load the ledger. The balance key is the first-run sentinel: if it is
    /// absent the profile has never been initialized.
    ///
    /// A missing applied-codes key with a present balance is a profile
    /// written before codes were tracked, and yields an empty set.
    pub fn load_ledger(&self) -> Result<LoadOutcome<LedgerState>, CoreError> {
        let raw_balance = match self.store.get(&self.balance_key())? {
            Some(raw) => raw,
            None => return Ok(LoadOutcome::FirstRun),
        };
        let balance = parse_balance(&raw_balance)?;

        let applied_codes = match self.store.get(&self.applied_codes_key())? {
            Some(raw) => parse_string_set(&raw, "applied promo codes")?
                .into_iter()
                .map(|c| normalize_code(&c))
                .collect(),
            None => BTreeSet::new(),
        };

        Ok(LoadOutcome::Existing(LedgerState {
            balance,
            applied_codes,
        }))
    }

    /// Write the initial balance and an empty applied-code set.
    pub fn initialize_ledger(&self, initial_balance: Decimal) -> Result<LedgerState, CoreError> {
        let state = LedgerState::new(initial_balance);
        self.save_ledger(&state)?;
        Ok(state)
    }

    /// Persist the balance/applied-codes pair (two writes).
    ///
    /// Codes are written first: if the balance write then fails, the code is
    /// spent without its bonus, never granted twice.
    pub fn save_ledger(&self, state: &LedgerState) -> Result<(), CoreError> {
        let codes = serde_json::to_string(&state.applied_codes).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize applied codes: {e}"))
        })?;
        self.store.set(&self.applied_codes_key(), &codes)?;
        self.store
            .set(&self.balance_key(), &state.balance.normalize().to_string())?;
        Ok(())
    }

    // ── Tutorial progress ───────────────────────────────────────────

    pub fn load_progress(&self) -> Result<LoadOutcome<BTreeSet<String>>, CoreError> {
        match self.store.get(&self.progress_key())? {
            Some(raw) => Ok(LoadOutcome::Existing(parse_string_set(
                &raw,
                "tutorial progress",
            )?)),
            None => Ok(LoadOutcome::FirstRun),
        }
    }

    pub fn save_progress(&self, completed: &BTreeSet<String>) -> Result<(), CoreError> {
        let json = serde_json::to_string(completed).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize tutorial progress: {e}"))
        })?;
        self.store.set(&self.progress_key(), &json)
    }
}

/// Accepts a bare numeric string ("11000.5") or a JSON-quoted one.
fn parse_balance(raw: &str) -> Result<Decimal, CoreError> {
    let trimmed = raw.trim().trim_matches('"');
    let balance = Decimal::from_str(trimmed)
        .map_err(|e| CoreError::Deserialization(format!("Invalid stored balance '{raw}': {e}")))?;
    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(CoreError::Deserialization(format!(
            "Stored balance must not be negative: {balance}"
        )));
    }
    Ok(balance)
}

fn parse_string_set(raw: &str, what: &str) -> Result<BTreeSet<String>, CoreError> {
    let items: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| CoreError::Deserialization(format!("Invalid stored {what}: {e}")))?;
    Ok(items.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_quoted_balances() {
        assert_eq!(parse_balance("11000").unwrap(), Decimal::new(11000, 0));
        assert_eq!(parse_balance("\"10500.25\"").unwrap(), Decimal::new(1050025, 2));
    }

    #[test]
    fn rejects_negative_balance() {
        assert!(matches!(
            parse_balance("-1"),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn rejects_non_array_set() {
        assert!(parse_string_set("{\"a\":1}", "x").is_err());
    }
}
