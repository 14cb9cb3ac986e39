use serde::{Deserialize, Serialize};

/// A simulated portfolio holding. Lives only in memory; the simulator
/// restarts from the seed list every session.
///
/// `value_usd` is derived and must always equal `amount × price_usd`;
/// use [`PortfolioAsset::with_price`] rather than mutating `price_usd` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAsset {
    /// Stable id (e.g., "btc")
    pub id: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Ticker symbol, uppercased (e.g., "BTC")
    pub symbol: String,

    /// Held quantity, fixed for the session
    pub amount: f64,

    pub price_usd: f64,

    pub value_usd: f64,

    /// 24h change in percent, kept within the simulator's bound
    pub change_24h: f64,
}

impl PortfolioAsset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        amount: f64,
        price_usd: f64,
        change_24h: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into().to_uppercase(),
            amount,
            price_usd,
            value_usd: amount * price_usd,
            change_24h,
        }
    }

    /// Copy with a new price/change, recomputing the derived value.
    #[must_use]
    pub fn with_price(&self, price_usd: f64, change_24h: f64) -> Self {
        Self {
            price_usd,
            value_usd: self.amount * price_usd,
            change_24h,
            ..self.clone()
        }
    }

    pub fn is_gaining(&self) -> bool {
        self.change_24h >= 0.0
    }
}
