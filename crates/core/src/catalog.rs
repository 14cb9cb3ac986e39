//! Built-in, read-only content: promo codes, tutorials, FAQs, blog posts,
//! seed events and the seed portfolio. Operator-defined; there is no write path.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::asset::PortfolioAsset;
use crate::models::content::{BlogPost, Faq};
use crate::models::event::{CryptoEvent, EventPriority};
use crate::models::promo::{normalize_code, PromoCode, PromoEffect};
use crate::models::tutorial::{Tutorial, TutorialMedia};

/// Validated lookup table of promo codes.
#[derive(Debug, Clone)]
pub struct PromoCatalog {
    codes: Vec<PromoCode>,
}

impl PromoCatalog {
    /// Build a catalog, rejecting empty or duplicate codes and effects that
    /// could drive the balance negative or to zero.
    pub fn new(codes: Vec<PromoCode>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for promo in &codes {
            let code = normalize_code(&promo.code);
            if code.is_empty() {
                return Err(CoreError::ValidationError("Promo code must not be empty".into()));
            }
            if !seen.insert(code.clone()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate promo code in catalog: {code}"
                )));
            }
            match promo.effect {
                PromoEffect::Multiplicative(factor) if factor <= Decimal::ZERO => {
                    return Err(CoreError::ValidationError(format!(
                        "Promo {code}: factor must be positive, got {factor}"
                    )));
                }
                PromoEffect::Additive(amount) if amount < Decimal::ZERO => {
                    return Err(CoreError::ValidationError(format!(
                        "Promo {code}: additive amount must not be negative, got {amount}"
                    )));
                }
                _ => {}
            }
        }
        Ok(Self { codes })
    }

    /// The demo platform's codes.
    pub fn builtin() -> Self {
        Self {
            codes: default_promo_codes(),
        }
    }

    /// Case-insensitive lookup.
    pub fn find(&self, code: &str) -> Option<&PromoCode> {
        let wanted = normalize_code(code);
        self.codes.iter().find(|p| normalize_code(&p.code) == wanted)
    }

    pub fn codes(&self) -> &[PromoCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for PromoCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── Built-in data ───────────────────────────────────────────────────

pub fn default_promo_codes() -> Vec<PromoCode> {
    vec![
        PromoCode::multiplicative(
            "DAPPER10",
            Decimal::new(11, 1),
            "Success! 10% bonus applied to your DD Coins.",
        ),
        PromoCode::multiplicative("CRYPTOFUN", Decimal::new(105, 2), "Awesome! 5% bonus added."),
        PromoCode::multiplicative(
            "WELCOME24",
            Decimal::new(115, 2),
            "Welcome aboard! Enjoy a 15% bonus.",
        ),
        PromoCode::additive("BTCBONUS", Decimal::new(50, 0), "Bonus! 50 DD Coins credited."),
    ]
}

pub fn default_tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial::new(
            "1",
            "Setting up 2FA",
            "Learn how to enhance your account security by enabling Two-Factor Authentication.",
            "Security",
            TutorialMedia::Video {
                url: "https://youtu.be/CCB89tKDlPE".into(),
            },
        ),
        Tutorial::new(
            "2",
            "Understanding Seed Phrases",
            "Discover what seed phrases are, why they are important, and how to manage them securely.",
            "Basics",
            TutorialMedia::Video {
                url: "https://video.pictory.ai/v2/preview/49976340139528182917241747749055095".into(),
            },
        ),
        Tutorial::new(
            "3",
            "How to Use Promo Codes",
            "A quick guide on finding and applying promo codes on the CryptoDapper platform.",
            "Platform Features",
            TutorialMedia::Text {
                body: "Open the dashboard, enter a code such as DAPPER10 in the promo box and press Apply. \
                       Each code can be redeemed once per browser."
                    .into(),
            },
        ),
        Tutorial::new(
            "4",
            "Introduction to Blockchain",
            "Get a basic understanding of blockchain technology and its core concepts.",
            "Concepts",
            TutorialMedia::None,
        ),
        Tutorial::new(
            "5",
            "What are DD Coins?",
            "Learn about the mock currency used on the CryptoDapper Demo platform.",
            "Platform Features",
            TutorialMedia::None,
        ),
    ]
}

pub fn default_faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            "1",
            "What is a seed phrase?",
            "A seed phrase is a series of words that gives you access to your crypto wallet. \
             It's like a master key. Keep it secret, keep it safe!",
        ),
        Faq::new(
            "2",
            "How do promo codes work on CryptoDapper?",
            "Promo codes are for simulation. Enter a valid code, and your mock DD Coin balance \
             will update, mimicking real promotional bonuses.",
        ),
        Faq::new(
            "3",
            "What is Two-Factor Authentication (2FA)?",
            "2FA adds an extra layer of security to your account. Besides your password, you'll \
             need a second code, usually from an authenticator app, to log in.",
        ),
        Faq::new(
            "4",
            "Are the crypto events real-time?",
            "The events displayed are mock data for demonstration purposes.",
        ),
        Faq::new(
            "5",
            "Is CryptoDapper a real exchange?",
            "No, CryptoDapper is a demo platform. All assets, transactions, and features are \
             simulated for educational and illustrative purposes only.",
        ),
    ]
}

pub fn default_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "What is Blockchain Technology?".into(),
            summary: "An introductory guide to the technology powering cryptocurrencies.".into(),
            date: date(2024, 7, 1),
            category: "Basics".into(),
            tags: vec!["blockchain".into(), "crypto".into(), "technology".into()],
            content: Some(
                "Blockchain is a distributed ledger that records transactions in blocks, each \
                 cryptographically linked to the previous one."
                    .into(),
            ),
            external_link: Some("https://www.geeksforgeeks.org/blockchain-technology-introduction/".into()),
            author: None,
        },
        BlogPost {
            id: "2".into(),
            title: "Why 2FA Matters for Your Crypto Security".into(),
            summary: "Understand the importance of Two-Factor Authentication in protecting your digital assets."
                .into(),
            date: date(2024, 6, 25),
            category: "Security".into(),
            tags: vec!["2fa".into(), "security".into(), "best practices".into()],
            content: Some(
                "If a password is stolen, a second factor still stands between an attacker and \
                 your account. Prefer authenticator apps or hardware keys over SMS."
                    .into(),
            ),
            external_link: None,
            author: None,
        },
        BlogPost {
            id: "3".into(),
            title: "Exploring Different Types of Crypto Wallets".into(),
            summary: "Hot, cold, hardware, and software wallets and their trade-offs.".into(),
            date: date(2024, 6, 18),
            category: "Wallets".into(),
            tags: vec!["wallets".into(), "hot wallet".into(), "cold wallet".into()],
            content: None,
            external_link: Some("https://www.blockchain-council.org/cryptocurrency/types-of-wallets/".into()),
            author: None,
        },
        BlogPost {
            id: "4".into(),
            title: "The Concept of Decentralization Explained".into(),
            summary: "What decentralization means in the context of cryptocurrencies and beyond.".into(),
            date: date(2024, 6, 10),
            category: "Concepts".into(),
            tags: vec!["decentralization".into(), "web3".into(), "dao".into()],
            content: None,
            external_link: None,
            author: None,
        },
    ]
}

pub fn seed_events() -> Vec<CryptoEvent> {
    vec![
        CryptoEvent::new("1", "Bitcoin Halving Event Announced for 2026", date(2024, 7, 20))
            .with_priority(EventPriority::High)
            .with_description("The next halving is anticipated in early 2026, further reducing block rewards."),
        CryptoEvent::new("2", "Ethereum Completes 'Dencun' Upgrade", date(2024, 7, 18))
            .with_description("The Dencun upgrade reduces Layer 2 transaction fees on Ethereum."),
        CryptoEvent::new("3", "Solana Network Upgrade v1.18 Deployed", date(2024, 7, 15))
            .with_description("Upgrade v1.18 focuses on performance and stability improvements."),
        CryptoEvent::new("4", "New DeFi Protocol Launches on Avalanche", date(2024, 7, 12))
            .with_description("A new protocol offering yield farming strategies has launched on the C-Chain."),
        CryptoEvent::new("5", "Cardano Summit 2024 Dates Revealed", date(2024, 7, 10))
            .with_description("The annual summit dates and location have been announced."),
    ]
}

pub fn seed_portfolio() -> Vec<PortfolioAsset> {
    vec![
        PortfolioAsset::new("btc", "Bitcoin", "BTC", 0.5, 60_000.0, 2.5),
        PortfolioAsset::new("eth", "Ethereum", "ETH", 10.0, 3_500.0, -1.2),
        PortfolioAsset::new("doge", "Dogecoin", "DOGE", 100_000.0, 0.15, 5.7),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
