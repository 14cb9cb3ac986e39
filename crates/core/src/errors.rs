use thiserror::Error;

/// Unified error type for the entire dapper-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Ledger ──────────────────────────────────────────────────────
    #[error("Promo code already used: {0}")]
    AlreadyUsed(String),

    #[error("Promo code not found: {0}")]
    PromoNotFound(String),

    // ── Providers (identity, recommendations) ───────────────────────
    #[error("Provider failure ({provider}): {message}")]
    ProviderFailure {
        provider: String,
        message: String,
    },

    #[error("Provider timed out after {0} ms")]
    Timeout(u64),

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Tutorial not found: {0}")]
    TutorialNotFound(String),

    #[error("Not signed in")]
    Unauthenticated,

    // ── Configuration ───────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Shorthand for wrapping an external collaborator's failure.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::ProviderFailure {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// `true` for the failures a user can fix by re-issuing the action
    /// (bad or spent promo code, invalid input).
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CoreError::AlreadyUsed(_)
                | CoreError::PromoNotFound(_)
                | CoreError::ValidationError(_)
                | CoreError::Unauthenticated
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<rust_decimal::Error> for CoreError {
    fn from(e: rust_decimal::Error) -> Self {
        CoreError::Deserialization(format!("Invalid decimal: {e}"))
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        CoreError::Config(e.to_string())
    }
}
