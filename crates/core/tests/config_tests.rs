// ═══════════════════════════════════════════════════════════════════
// Config Tests — defaults, validation, file and env layering
// ═══════════════════════════════════════════════════════════════════

use rust_decimal::Decimal;
use std::time::Duration;
use tempfile::TempDir;

use dapper_core::config::PlatformConfig;
use dapper_core::errors::CoreError;
use dapper_core::models::tutorial::AutoCompletePolicy;

// ── Defaults ────────────────────────────────────────────────────────

mod defaults {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = PlatformConfig::default();
        assert_eq!(cfg.storage_namespace, "cryptoDapper");
        assert_eq!(cfg.initial_balance, Decimal::new(10_000, 0));
        assert_eq!(cfg.tick_interval(), Duration::from_secs(3));
        assert_eq!(cfg.auto_complete_policy, AutoCompletePolicy::OnVideoOpen);
        assert_eq!(cfg.recommendation_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.max_recommendations, 3);
        assert_eq!(cfg.demo_phone_code, "123456");
    }

    #[test]
    fn defaults_are_valid() {
        assert!(PlatformConfig::default().validate().is_ok());
    }
}

// ── Validation ──────────────────────────────────────────────────────

mod validation {
    use super::*;

    fn assert_invalid(cfg: PlatformConfig) {
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn empty_namespace() {
        assert_invalid(PlatformConfig {
            storage_namespace: "  ".into(),
            ..Default::default()
        });
    }

    #[test]
    fn negative_initial_balance() {
        assert_invalid(PlatformConfig {
            initial_balance: Decimal::new(-1, 0),
            ..Default::default()
        });
    }

    #[test]
    fn zero_initial_balance_is_allowed() {
        let cfg = PlatformConfig {
            initial_balance: Decimal::ZERO,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_durations_and_caps() {
        assert_invalid(PlatformConfig {
            tick_interval_ms: 0,
            ..Default::default()
        });
        assert_invalid(PlatformConfig {
            recommendation_timeout_ms: 0,
            ..Default::default()
        });
        assert_invalid(PlatformConfig {
            max_recommendations: 0,
            ..Default::default()
        });
    }
}

// ── Loading ─────────────────────────────────────────────────────────

mod loading {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let cfg = PlatformConfig::load(path.to_str()).unwrap();
        assert_eq!(cfg.storage_namespace, "cryptoDapper");
        assert_eq!(cfg.demo_phone_code, "123456");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dapper.toml");
        std::fs::write(
            &path,
            r#"
storage_namespace = "staging_"
initial_balance = "2500.50"
auto_complete_policy = "manual"
max_recommendations = 5
"#,
        )
        .unwrap();

        let cfg = PlatformConfig::load(path.to_str()).unwrap();
        assert_eq!(cfg.storage_namespace, "staging_");
        assert_eq!(cfg.initial_balance, Decimal::new(250_050, 2));
        assert_eq!(cfg.auto_complete_policy, AutoCompletePolicy::Manual);
        assert_eq!(cfg.max_recommendations, 5);
        assert_eq!(cfg.demo_phone_code, "123456");
    }

    #[test]
    fn invalid_file_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dapper.toml");
        std::fs::write(&path, "recommendation_timeout_ms = 0\n").unwrap();

        assert!(matches!(
            PlatformConfig::load(path.to_str()),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dapper.toml");
        std::fs::write(&path, "tick_interval_ms = 1000\n").unwrap();

        std::env::set_var("DAPPER_TICK_INTERVAL_MS", "250");
        let cfg = PlatformConfig::load(path.to_str());
        std::env::remove_var("DAPPER_TICK_INTERVAL_MS");

        assert_eq!(cfg.unwrap().tick_interval(), Duration::from_millis(250));
    }
}
