use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::watch;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::user::{SocialProvider, User};

use super::traits::IdentityProvider;

const PROVIDER_NAME: &str = "MockIdentity";
const MIN_PASSWORD_LEN: usize = 6;

/// Demo identity backend. No real security: any well-formed email with a
/// long-enough password signs in, and every phone gets the same OTP.
pub struct MockIdentityProvider {
    state: watch::Sender<Option<User>>,
    /// verification id → phone number awaiting confirmation
    pending_phone: Mutex<HashMap<String, String>>,
    phone_code: String,
}

impl MockIdentityProvider {
    pub fn new(phone_code: impl Into<String>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state,
            pending_phone: Mutex::new(HashMap::new()),
            phone_code: phone_code.into(),
        }
    }

    fn set_user(&self, user: Option<User>) {
        self.state.send_replace(user);
    }

    fn failure(message: impl Into<String>) -> CoreError {
        CoreError::provider(PROVIDER_NAME, message)
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new("123456")
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.trim().trim_start_matches('+');
    digits.len() >= 7 && digits.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentityProvider for MockIdentityProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn current_user(&self) -> Option<User> {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.state.subscribe()
    }

    async fn sign_in_with_email(&self, email: &str, password: &str) -> Result<User, CoreError> {
        if !is_valid_email(email) {
            return Err(Self::failure(format!("invalid email address '{email}'")));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Self::failure(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let user = User::with_email(email.trim().to_lowercase());
        self.set_user(Some(user.clone()));
        tracing::info!(user_id = %user.id, "signed in with email");
        Ok(user)
    }

    async fn sign_in_with_provider(&self, provider: SocialProvider) -> Result<User, CoreError> {
        let mut user = User::with_email(format!("demo.user@{provider}.example"));
        user.display_name = Some(format!("Demo {provider} user"));
        user.email_verified = true;
        self.set_user(Some(user.clone()));
        tracing::info!(user_id = %user.id, %provider, "signed in with social provider");
        Ok(user)
    }

    async fn request_phone_code(&self, phone: &str) -> Result<String, CoreError> {
        if !is_valid_phone(phone) {
            return Err(Self::failure(format!("invalid phone number '{phone}'")));
        }
        let verification_id = Uuid::new_v4().to_string();
        self.pending_phone
            .lock()
            .map_err(|_| Self::failure("verification state poisoned"))?
            .insert(verification_id.clone(), phone.trim().to_string());
        Ok(verification_id)
    }

    async fn confirm_phone_code(
        &self,
        verification_id: &str,
        code: &str,
    ) -> Result<User, CoreError> {
        let mut pending = self
            .pending_phone
            .lock()
            .map_err(|_| Self::failure("verification state poisoned"))?;
        let phone = pending
            .get(verification_id)
            .cloned()
            .ok_or_else(|| Self::failure("unknown or expired verification id"))?;
        if code.trim() != self.phone_code {
            return Err(Self::failure("incorrect verification code"));
        }
        pending.remove(verification_id);
        drop(pending);

        let user = User::with_phone(phone);
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), CoreError> {
        self.set_user(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), CoreError> {
        if !is_valid_email(email) {
            return Err(Self::failure(format!("invalid email address '{email}'")));
        }
        tracing::info!("password reset email queued (simulated)");
        Ok(())
    }

    async fn send_email_verification(&self) -> Result<(), CoreError> {
        let mut user = self
            .current_user()
            .ok_or_else(|| Self::failure("no signed-in user"))?;
        if user.email.is_none() {
            return Err(Self::failure("signed-in user has no email"));
        }
        // Demo: verification is instantaneous
        user.email_verified = true;
        self.set_user(Some(user));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@localhost"));
    }

    #[test]
    fn phone_validation() {
        assert!(is_valid_phone("+48 123 456 789"));
        assert!(!is_valid_phone("12ab"));
    }
}
