use rust_decimal::Decimal;
use std::collections::BTreeSet;

use crate::catalog::PromoCatalog;
use crate::errors::CoreError;
use crate::models::ledger::{LedgerState, Redemption};
use crate::models::promo::normalize_code;
use crate::storage::repository::{LoadOutcome, ProfileRepository};

/// Owns the coin balance and the set of redeemed promo codes.
///
/// Rules:
/// - A code is redeemed at most once per profile (case-insensitive).
/// - Failed redemptions never touch the balance or the store.
/// - A successful redemption persists the balance/codes pair before returning.
pub struct LedgerService {
    catalog: PromoCatalog,
    repository: ProfileRepository,
    state: LedgerState,
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService")
            .field("balance", &self.state.balance)
            .field("applied_codes", &self.state.applied_codes.len())
            .finish()
    }
}

impl LedgerService {
    /// Load the profile's ledger, initializing it on first run.
    pub fn open(
        repository: ProfileRepository,
        catalog: PromoCatalog,
        initial_balance: Decimal,
    ) -> Result<Self, CoreError> {
        let state = match repository.load_ledger()? {
            LoadOutcome::Existing(state) => state,
            LoadOutcome::FirstRun => {
                let state = repository.initialize_ledger(initial_balance)?;
                tracing::info!(balance = %state.balance, "initialized ledger for new profile");
                state
            }
        };

        Ok(Self {
            catalog,
            repository,
            state,
        })
    }

    /// Redeem a promo code.
    ///
    /// 1. Normalize (trim + uppercase).
    /// 2. Already applied → `AlreadyUsed`.
    /// 3. Not in catalog → `PromoNotFound`.
    /// 4. Apply effect, record code, persist, return the catalog message.
    pub fn redeem(&mut self, code: &str) -> Result<Redemption, CoreError> {
        let normalized = normalize_code(code);

        if self.state.applied_codes.contains(&normalized) {
            tracing::warn!(code = %normalized, "promo code already used");
            return Err(CoreError::AlreadyUsed(normalized));
        }

        let promo = match self.catalog.find(&normalized) {
            Some(p) => p,
            None => {
                tracing::warn!(code = %normalized, "promo code not found");
                return Err(CoreError::PromoNotFound(normalized));
            }
        };

        let mut next = self.state.clone();
        next.balance = promo.effect.apply(self.state.balance)?;
        next.applied_codes.insert(normalized.clone());

        if let Err(e) = self.repository.save_ledger(&next) {
            // The codes write may have landed; put the old pair back.
            if let Err(restore) = self.repository.save_ledger(&self.state) {
                tracing::error!(error = %restore, "failed to restore ledger after write error");
                // Follow whatever the store now holds, so a code it marks spent stays spent.
                if let Ok(LoadOutcome::Existing(stored)) = self.repository.load_ledger() {
                    self.state = stored;
                }
            }
            return Err(CoreError::Storage(format!(
                "Failed to persist redemption of {normalized}: {e}"
            )));
        }

        let redemption = Redemption {
            code: normalized,
            new_balance: next.balance,
            message: promo.message.clone(),
        };
        self.state = next;

        tracing::info!(
            code = %redemption.code,
            balance = %redemption.new_balance,
            "promo code redeemed"
        );
        Ok(redemption)
    }

    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.state.balance
    }

    /// Balance rounded to cents for display.
    #[must_use]
    pub fn display_balance(&self) -> Decimal {
        self.state.balance.round_dp(2)
    }

    #[must_use]
    pub fn applied_codes(&self) -> &BTreeSet<String> {
        &self.state.applied_codes
    }

    #[must_use]
    pub fn is_applied(&self, code: &str) -> bool {
        self.state.applied_codes.contains(&normalize_code(code))
    }

    #[must_use]
    pub fn catalog(&self) -> &PromoCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &LedgerState {
        &self.state
    }
}
