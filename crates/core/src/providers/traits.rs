use async_trait::async_trait;
use tokio::sync::watch;

use crate::errors::CoreError;
use crate::models::asset::PortfolioAsset;
use crate::models::content::{BlogPost, Faq};
use crate::models::event::{CryptoEvent, GeneratedEvent};
use crate::models::promo::PromoCode;
use crate::models::tutorial::Tutorial;
use crate::models::user::{SocialProvider, User};

/// A catalog entry as offered to the recommendation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
}

impl From<&Tutorial> for CatalogEntry {
    fn from(t: &Tutorial) -> Self {
        Self {
            title: t.title.clone(),
            description: t.description.clone(),
        }
    }
}

/// Generative-model backed tutorial recommender.
///
/// Implementations are expected to return titles from `catalog`, but the
/// service filters the output anyway; a provider may return anything.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RecommendationProvider: Send + Sync {
    /// Human-readable name (for logs/errors).
    fn name(&self) -> &str;

    async fn recommend(
        &self,
        interest: &str,
        catalog: &[CatalogEntry],
    ) -> Result<Vec<String>, CoreError>;
}

/// Generative-model backed news feed producing fictional crypto events.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EventProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate_events(&self) -> Result<Vec<GeneratedEvent>, CoreError>;
}

/// Authentication backend. The ledger and progress core never call this;
/// only the session layer does.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentityProvider: Send + Sync {
    fn name(&self) -> &str;

    fn current_user(&self) -> Option<User>;

    /// Observable auth state; yields the new user (or `None`) on every change.
    fn subscribe(&self) -> watch::Receiver<Option<User>>;

    async fn sign_in_with_email(&self, email: &str, password: &str) -> Result<User, CoreError>;

    async fn sign_in_with_provider(&self, provider: SocialProvider) -> Result<User, CoreError>;

    /// Send a one-time code. Returns an opaque verification id.
    async fn request_phone_code(&self, phone: &str) -> Result<String, CoreError>;

    async fn confirm_phone_code(&self, verification_id: &str, code: &str)
        -> Result<User, CoreError>;

    async fn sign_out(&self) -> Result<(), CoreError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), CoreError>;

    async fn send_email_verification(&self) -> Result<(), CoreError>;
}

/// Read-only catalogs loaded at startup.
pub trait ContentSource: Send + Sync {
    fn tutorials(&self) -> &[Tutorial];
    fn faqs(&self) -> &[Faq];
    fn blog_posts(&self) -> &[BlogPost];
    fn promo_codes(&self) -> &[PromoCode];
    fn seed_events(&self) -> &[CryptoEvent];
    fn seed_portfolio(&self) -> &[PortfolioAsset];

    fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials().iter().find(|t| t.id == id)
    }

    fn blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts().iter().find(|p| p.id == id)
    }

    /// Case-insensitive search over questions and answers.
    /// A blank query returns every FAQ.
    fn search_faqs(&self, query: &str) -> Vec<&Faq> {
        let query = query.trim();
        self.faqs()
            .iter()
            .filter(|f| query.is_empty() || f.matches(query))
            .collect()
    }
}
