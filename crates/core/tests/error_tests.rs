// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use dapper_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn already_used() {
        let err = CoreError::AlreadyUsed("DAPPER10".into());
        assert_eq!(err.to_string(), "Promo code already used: DAPPER10");
    }

    #[test]
    fn promo_not_found() {
        let err = CoreError::PromoNotFound("NOPE".into());
        assert_eq!(err.to_string(), "Promo code not found: NOPE");
    }

    #[test]
    fn provider_failure() {
        let err = CoreError::provider("Gemini", "quota exceeded");
        assert_eq!(err.to_string(), "Provider failure (Gemini): quota exceeded");
    }

    #[test]
    fn timeout() {
        assert_eq!(
            CoreError::Timeout(15_000).to_string(),
            "Provider timed out after 15000 ms"
        );
    }

    #[test]
    fn storage() {
        let err = CoreError::Storage("quota exceeded".into());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("bad".into());
        assert_eq!(err.to_string(), "Validation failed: bad");
    }

    #[test]
    fn tutorial_not_found() {
        let err = CoreError::TutorialNotFound("7".into());
        assert_eq!(err.to_string(), "Tutorial not found: 7");
    }

    #[test]
    fn unauthenticated() {
        assert_eq!(CoreError::Unauthenticated.to_string(), "Not signed in");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("missing".into());
        assert_eq!(err.to_string(), "Configuration error: missing");
    }
}

// ── Classification ──────────────────────────────────────────────────

mod classification {
    use super::*;

    #[test]
    fn user_facing() {
        assert!(CoreError::AlreadyUsed("X".into()).is_user_facing());
        assert!(CoreError::PromoNotFound("X".into()).is_user_facing());
        assert!(CoreError::ValidationError("x".into()).is_user_facing());
        assert!(CoreError::Unauthenticated.is_user_facing());
    }

    #[test]
    fn not_user_facing() {
        assert!(!CoreError::Storage("x".into()).is_user_facing());
        assert!(!CoreError::Timeout(1).is_user_facing());
        assert!(!CoreError::provider("p", "m").is_user_facing());
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("gone")));
    }

    #[test]
    fn from_serde_json_error() {
        let e = serde_json::from_str::<Vec<String>>("nope").unwrap_err();
        assert!(matches!(CoreError::from(e), CoreError::Deserialization(_)));
    }

    #[test]
    fn from_decimal_error() {
        let e = "abc".parse::<rust_decimal::Decimal>().unwrap_err();
        let err = CoreError::from(e);
        assert!(err.to_string().starts_with("Deserialization error: Invalid decimal"));
    }

    #[test]
    fn from_config_error() {
        let e = config::ConfigError::Message("boom".into());
        assert!(matches!(CoreError::from(e), CoreError::Config(ref m) if m == "boom"));
    }

    #[test]
    fn question_mark_propagation() {
        fn parse(raw: &str) -> Result<Vec<String>, CoreError> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(parse("[\"a\"]").is_ok());
        assert!(parse("{").is_err());
    }
}
