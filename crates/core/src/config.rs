use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::ledger::DEFAULT_INITIAL_BALANCE;
use crate::models::tutorial::AutoCompletePolicy;
use crate::storage::repository::DEFAULT_NAMESPACE;

/// Runtime configuration for a platform instance.
///
/// Every field has a default, so an empty source yields a working demo.
/// Sources, lowest priority first: defaults, optional file, `DAPPER_*` env vars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Prefix for every persisted key
    pub storage_namespace: String,

    /// Balance written on a profile's first run
    pub initial_balance: Decimal,

    /// Price simulator period
    pub tick_interval_ms: u64,

    pub auto_complete_policy: AutoCompletePolicy,

    /// Upper bound on a single generative-model call (recommendations, event feed)
    pub recommendation_timeout_ms: u64,

    pub max_recommendations: usize,

    /// OTP accepted by the mock identity provider
    pub demo_phone_code: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_NAMESPACE.to_string(),
            initial_balance: DEFAULT_INITIAL_BALANCE,
            tick_interval_ms: 3_000,
            auto_complete_policy: AutoCompletePolicy::OnVideoOpen,
            recommendation_timeout_ms: 15_000,
            max_recommendations: 3,
            demo_phone_code: "123456".to_string(),
        }
    }
}

impl PlatformConfig {
    /// Load from an optional file (any format the `config` crate detects
    /// by extension) layered under `DAPPER_*` environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, CoreError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let cfg: Self = builder
            .add_source(Environment::with_prefix("DAPPER").try_parsing(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_namespace.trim().is_empty() {
            return Err(CoreError::Config("storage_namespace must not be empty".into()));
        }
        if self.initial_balance.is_sign_negative() && !self.initial_balance.is_zero() {
            return Err(CoreError::Config(format!(
                "initial_balance must not be negative, got {}",
                self.initial_balance
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be positive".into()));
        }
        if self.recommendation_timeout_ms == 0 {
            return Err(CoreError::Config(
                "recommendation_timeout_ms must be positive".into(),
            ));
        }
        if self.max_recommendations == 0 {
            return Err(CoreError::Config("max_recommendations must be at least 1".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn recommendation_timeout(&self) -> Duration {
        Duration::from_millis(self.recommendation_timeout_ms)
    }
}
