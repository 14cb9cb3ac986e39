use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// What redeeming a promo code does to the coin balance.
///
/// An enum rather than two optional fields: a catalog entry carries
/// exactly one kind of effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum PromoEffect {
    /// `balance := balance × factor` (e.g., 1.1 for a 10% bonus)
    Multiplicative(Decimal),
    /// `balance := balance + amount`, independent of the current balance
    Additive(Decimal),
}

impl PromoEffect {
    /// Apply the effect to a balance. Fails only on decimal overflow.
    pub fn apply(&self, balance: Decimal) -> Result<Decimal, CoreError> {
        let result = match self {
            PromoEffect::Multiplicative(factor) => balance.checked_mul(*factor),
            PromoEffect::Additive(amount) => balance.checked_add(*amount),
        };
        result.ok_or_else(|| {
            CoreError::ValidationError(format!("Balance overflow applying {self}"))
        })
    }
}

impl std::fmt::Display for PromoEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromoEffect::Multiplicative(factor) => write!(f, "x{factor}"),
            PromoEffect::Additive(amount) => write!(f, "+{amount}"),
        }
    }
}

/// A catalog-defined promo code. Static, operator-defined, never user-mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    /// Code, uppercased (e.g., "DAPPER10")
    pub code: String,

    pub effect: PromoEffect,

    /// Shown to the user after a successful redemption
    pub message: String,
}

impl PromoCode {
    pub fn new(code: impl Into<String>, effect: PromoEffect, message: impl Into<String>) -> Self {
        Self {
            code: normalize_code(&code.into()),
            effect,
            message: message.into(),
        }
    }

    pub fn multiplicative(
        code: impl Into<String>,
        factor: Decimal,
        message: impl Into<String>,
    ) -> Self {
        Self::new(code, PromoEffect::Multiplicative(factor), message)
    }

    pub fn additive(code: impl Into<String>, amount: Decimal, message: impl Into<String>) -> Self {
        Self::new(code, PromoEffect::Additive(amount), message)
    }
}

/// Canonical form used for lookup and duplicate detection.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
