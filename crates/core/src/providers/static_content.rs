use crate::catalog;
use crate::models::asset::PortfolioAsset;
use crate::models::content::{BlogPost, Faq};
use crate::models::event::CryptoEvent;
use crate::models::promo::PromoCode;
use crate::models::tutorial::Tutorial;

use super::traits::ContentSource;

/// Content source serving the built-in catalogs, or any caller-supplied lists.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    tutorials: Vec<Tutorial>,
    faqs: Vec<Faq>,
    blog_posts: Vec<BlogPost>,
    promo_codes: Vec<PromoCode>,
    events: Vec<CryptoEvent>,
    portfolio: Vec<PortfolioAsset>,
}

impl StaticContent {
    /// The demo platform's content. Events are kept newest-first.
    pub fn builtin() -> Self {
        Self::empty()
            .with_tutorials(catalog::default_tutorials())
            .with_faqs(catalog::default_faqs())
            .with_blog_posts(catalog::default_blog_posts())
            .with_promo_codes(catalog::default_promo_codes())
            .with_events(catalog::seed_events())
            .with_portfolio(catalog::seed_portfolio())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tutorials(mut self, tutorials: Vec<Tutorial>) -> Self {
        self.tutorials = tutorials;
        self
    }

    #[must_use]
    pub fn with_faqs(mut self, faqs: Vec<Faq>) -> Self {
        self.faqs = faqs;
        self
    }

    #[must_use]
    pub fn with_blog_posts(mut self, posts: Vec<BlogPost>) -> Self {
        self.blog_posts = posts;
        self
    }

    #[must_use]
    pub fn with_promo_codes(mut self, codes: Vec<PromoCode>) -> Self {
        self.promo_codes = codes;
        self
    }

    #[must_use]
    pub fn with_events(mut self, mut events: Vec<CryptoEvent>) -> Self {
        events.sort_by(|a, b| b.date.cmp(&a.date));
        self.events = events;
        self
    }

    #[must_use]
    pub fn with_portfolio(mut self, assets: Vec<PortfolioAsset>) -> Self {
        self.portfolio = assets;
        self
    }
}

impl ContentSource for StaticContent {
    fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    fn promo_codes(&self) -> &[PromoCode] {
        &self.promo_codes
    }

    fn seed_events(&self) -> &[CryptoEvent] {
        &self.events
    }

    fn seed_portfolio(&self) -> &[PortfolioAsset] {
        &self.portfolio
    }
}
