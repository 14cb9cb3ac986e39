use std::sync::Arc;
use tokio::sync::watch;

use crate::errors::CoreError;
use crate::models::user::{SocialProvider, User};
use crate::providers::traits::IdentityProvider;

/// Per-view session context. Holds the injected identity provider; views
/// receive this explicitly instead of reaching for a global auth singleton.
///
/// Cloning is cheap and shares the same provider.
#[derive(Clone)]
pub struct SessionContext {
    identity: Arc<dyn IdentityProvider>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("provider", &self.identity.name())
            .field("signed_in", &self.is_authenticated())
            .finish()
    }
}

impl SessionContext {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.identity.current_user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.current_user().is_some()
    }

    /// Gate for authenticated pages.
    pub fn require_user(&self) -> Result<User, CoreError> {
        self.identity.current_user().ok_or(CoreError::Unauthenticated)
    }

    pub fn auth_changes(&self) -> watch::Receiver<Option<User>> {
        self.identity.subscribe()
    }

    pub async fn sign_in_with_email(&self, email: &str, password: &str) -> Result<User, CoreError> {
        self.identity.sign_in_with_email(email, password).await
    }

    pub async fn sign_in_with_provider(&self, provider: SocialProvider) -> Result<User, CoreError> {
        self.identity.sign_in_with_provider(provider).await
    }

    pub async fn request_phone_code(&self, phone: &str) -> Result<String, CoreError> {
        self.identity.request_phone_code(phone).await
    }

    pub async fn confirm_phone_code(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<User, CoreError> {
        self.identity.confirm_phone_code(verification_id, code).await
    }

    pub async fn sign_out(&self) -> Result<(), CoreError> {
        self.identity.sign_out().await
    }

    pub async fn send_password_reset(&self, email: &str) -> Result<(), CoreError> {
        self.identity.send_password_reset(email).await
    }

    pub async fn send_email_verification(&self) -> Result<(), CoreError> {
        self.identity.send_email_verification().await
    }
}
