pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod session;
pub mod storage;

use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::Arc;

use catalog::PromoCatalog;
use config::PlatformConfig;
use errors::CoreError;
use models::{
    content::{BlogPost, Faq},
    event::CryptoEvent,
    ledger::Redemption,
    tutorial::{OpenedTutorial, Tutorial, TutorialView},
};
use providers::{
    static_content::StaticContent,
    traits::{ContentSource, EventProvider, RecommendationProvider},
};
use services::{
    event_feed_service::EventFeedService,
    ledger_service::LedgerService,
    price_simulator::{PriceSimulator, SimulatorHandle},
    progress_service::{self, ProgressService},
    recommendation_service::RecommendationService,
    wallet_service::{DepositInstructions, WalletService, WithdrawMethod, WithdrawalReceipt},
};
use storage::{repository::ProfileRepository, traits::KeyValueStore};

/// Main entry point for the dapper-core library.
/// Holds one browser profile's ledger and tutorial progress plus the
/// read-only content, and the services that operate on them.
///
/// Nothing here depends on who is signed in: state is keyed per profile.
/// Identity lives in [`session::SessionContext`].
#[must_use]
pub struct DapperPlatform {
    config: PlatformConfig,
    content: Box<dyn ContentSource>,
    ledger: LedgerService,
    progress: ProgressService,
    wallet: WalletService,
    recommendations: Option<RecommendationService>,
    event_feed: Option<EventFeedService>,
}

impl std::fmt::Debug for DapperPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DapperPlatform")
            .field("balance", &self.ledger.balance())
            .field("applied_codes", &self.ledger.applied_codes().len())
            .field("completed_tutorials", &self.progress.completed_ids().len())
            .field("tutorials", &self.content.tutorials().len())
            .field(
                "recommendation_provider",
                &self.recommendations.as_ref().map(|r| r.provider_name()),
            )
            .field(
                "event_provider",
                &self.event_feed.as_ref().map(|e| e.provider_name()),
            )
            .finish()
    }
}

impl DapperPlatform {
    /// Open a profile with the built-in content.
    /// On first run the ledger is initialized before this returns.
    pub fn open(store: Arc<dyn KeyValueStore>, config: PlatformConfig) -> Result<Self, CoreError> {
        Self::with_content(store, config, Box::new(StaticContent::builtin()))
    }

    /// Open a profile with caller-supplied content.
    pub fn with_content(
        store: Arc<dyn KeyValueStore>,
        config: PlatformConfig,
        content: Box<dyn ContentSource>,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let repository = ProfileRepository::new(store, config.storage_namespace.clone());
        let catalog = PromoCatalog::new(content.promo_codes().to_vec())?;
        let ledger = LedgerService::open(repository.clone(), catalog, config.initial_balance)?;
        let progress = ProgressService::open(repository)?;

        Ok(Self {
            config,
            content,
            ledger,
            progress,
            wallet: WalletService::new(),
            recommendations: None,
            event_feed: None,
        })
    }

    /// Attach the generative-model recommender. Without one,
    /// recommendations are always empty.
    pub fn set_recommendation_provider(&mut self, provider: Box<dyn RecommendationProvider>) {
        self.recommendations = Some(RecommendationService::new(
            provider,
            self.config.recommendation_timeout(),
            self.config.max_recommendations,
        ));
    }

    /// Attach the generative-model event feed used by [`Self::generated_events`].
    pub fn set_event_provider(&mut self, provider: Box<dyn EventProvider>) {
        self.event_feed = Some(EventFeedService::new(
            provider,
            self.config.recommendation_timeout(),
        ));
    }

    #[must_use]
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    // ── Ledger ──────────────────────────────────────────────────────

    /// Redeem a promo code (case-insensitive, once per profile).
    pub fn redeem_promo(&mut self, code: &str) -> Result<Redemption, CoreError> {
        self.ledger.redeem(code)
    }

    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.ledger.balance()
    }

    /// Balance rounded to cents.
    #[must_use]
    pub fn display_balance(&self) -> Decimal {
        self.ledger.display_balance()
    }

    #[must_use]
    pub fn applied_codes(&self) -> &BTreeSet<String> {
        self.ledger.applied_codes()
    }

    #[must_use]
    pub fn is_promo_applied(&self, code: &str) -> bool {
        self.ledger.is_applied(code)
    }

    // ── Tutorials & Progress ────────────────────────────────────────

    /// All tutorials with their completion flags.
    #[must_use]
    pub fn tutorials(&self) -> Vec<TutorialView<'_>> {
        self.progress.views(self.content.tutorials())
    }

    #[must_use]
    pub fn tutorials_in_category(&self, category: &str) -> Vec<TutorialView<'_>> {
        self.progress
            .views_in_category(self.content.tutorials(), category)
    }

    #[must_use]
    pub fn tutorial_categories(&self) -> Vec<&str> {
        progress_service::categories(self.content.tutorials())
    }

    #[must_use]
    pub fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.content.tutorial(id)
    }

    /// Mark or unmark a tutorial. Unknown ids are accepted and stored.
    pub fn set_tutorial_completion(
        &mut self,
        id: &str,
        is_complete: bool,
    ) -> Result<(), CoreError> {
        self.progress.set_completion(id, is_complete)
    }

    /// Open a tutorial; may auto-complete it depending on the configured policy.
    pub fn open_tutorial(&mut self, id: &str) -> Result<OpenedTutorial, CoreError> {
        let tutorial = self
            .content
            .tutorial(id)
            .ok_or_else(|| CoreError::TutorialNotFound(id.to_string()))?;
        self.progress
            .open_tutorial(tutorial, self.config.auto_complete_policy)
    }

    #[must_use]
    pub fn is_tutorial_completed(&self, id: &str) -> bool {
        self.progress.is_completed(id)
    }

    #[must_use]
    pub fn completed_tutorial_count(&self) -> usize {
        self.progress.completed_count(self.content.tutorials())
    }

    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        self.progress.percent_complete(self.content.tutorials())
    }

    // ── Recommendations ─────────────────────────────────────────────

    /// Suggest tutorial titles for a free-text interest. Provider failures
    /// degrade to an empty list; blank input is a validation error.
    pub async fn recommend_tutorials(&self, interest: &str) -> Result<Vec<String>, CoreError> {
        match &self.recommendations {
            Some(service) => service.recommend(interest, self.content.tutorials()).await,
            None => {
                if interest.trim().is_empty() {
                    return Err(CoreError::ValidationError(
                        "Please describe your feature usage or interests".into(),
                    ));
                }
                tracing::warn!("no recommendation provider configured");
                Ok(Vec::new())
            }
        }
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// A fresh simulator seeded from the content's portfolio.
    pub fn price_simulator(&self) -> PriceSimulator {
        PriceSimulator::from_seed(self.content.seed_portfolio())
    }

    /// Start the simulated ticker at the configured interval.
    /// The returned handle owns the timer; drop it when the view goes away.
    pub fn start_price_simulator(&self) -> Result<SimulatorHandle, CoreError> {
        self.price_simulator().spawn(self.config.tick_interval())
    }

    // ── Wallet (simulated) ──────────────────────────────────────────

    /// Acknowledge a withdrawal. Does not debit the balance.
    pub fn withdraw(
        &self,
        amount: Decimal,
        method: WithdrawMethod,
    ) -> Result<WithdrawalReceipt, CoreError> {
        self.wallet.withdraw(amount, method)
    }

    /// Deposit instructions. Does not credit the balance.
    pub fn deposit(&self, symbol: &str, network: &str) -> Result<DepositInstructions, CoreError> {
        self.wallet.deposit(symbol, network)
    }

    // ── Content ─────────────────────────────────────────────────────

    #[must_use]
    pub fn faqs(&self) -> &[Faq] {
        self.content.faqs()
    }

    #[must_use]
    pub fn search_faqs(&self, query: &str) -> Vec<&Faq> {
        self.content.search_faqs(query)
    }

    #[must_use]
    pub fn blog_posts(&self) -> &[BlogPost] {
        self.content.blog_posts()
    }

    #[must_use]
    pub fn blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.content.blog_post(id)
    }

    #[must_use]
    pub fn events(&self) -> &[CryptoEvent] {
        self.content.seed_events()
    }

    /// Freshly generated events, newest first. Empty without a provider
    /// or when the provider fails.
    pub async fn generated_events(&self) -> Vec<CryptoEvent> {
        match &self.event_feed {
            Some(feed) => feed.fetch().await,
            None => {
                tracing::warn!("no event provider configured");
                Vec::new()
            }
        }
    }
}
