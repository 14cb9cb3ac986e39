use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::errors::CoreError;
use crate::models::asset::PortfolioAsset;

/// Prices never drop below one cent.
pub const PRICE_FLOOR_USD: f64 = 0.01;

/// Max relative price move per tick (±0.5%).
pub const MAX_PRICE_STEP: f64 = 0.005;

/// Max 24h-change move per tick, in percentage points.
pub const MAX_CHANGE_STEP: f64 = 0.5;

/// `change_24h` stays within ±15%.
pub const CHANGE_24H_BOUND: f64 = 15.0;

/// Bounded random walk over an in-memory portfolio.
///
/// Each tick moves every asset independently and replaces the whole list
/// at once; readers never see a half-updated portfolio.
#[derive(Debug, Clone)]
pub struct PriceSimulator {
    assets: Vec<PortfolioAsset>,
}

impl PriceSimulator {
    /// Start from a seed list. Seed values are pulled inside the walk's
    /// bounds so the invariants hold before the first tick.
    pub fn from_seed(seed: &[PortfolioAsset]) -> Self {
        let assets = seed
            .iter()
            .map(|a| {
                let price = if a.price_usd.is_finite() {
                    a.price_usd.max(PRICE_FLOOR_USD)
                } else {
                    PRICE_FLOOR_USD
                };
                let change = if a.change_24h.is_finite() {
                    a.change_24h.clamp(-CHANGE_24H_BOUND, CHANGE_24H_BOUND)
                } else {
                    0.0
                };
                a.with_price(price, change)
            })
            .collect();
        Self { assets }
    }

    /// Advance one step using the thread-local RNG.
    pub fn tick(&mut self) {
        self.tick_with(&mut rand::thread_rng());
    }

    /// Advance one step with a caller-supplied RNG (seeded in tests).
    pub fn tick_with<R: Rng>(&mut self, rng: &mut R) {
        let next: Vec<PortfolioAsset> = self.assets.iter().map(|a| step(a, rng)).collect();
        self.assets = next;
        tracing::debug!(total_value_usd = self.total_value_usd(), "price tick");
    }

    #[must_use]
    pub fn assets(&self) -> &[PortfolioAsset] {
        &self.assets
    }

    #[must_use]
    pub fn total_value_usd(&self) -> f64 {
        self.assets.iter().map(|a| a.value_usd).sum()
    }

    /// Run the walk on a tokio task, ticking every `interval`.
    /// Fails with `CoreError::Config` when no tokio runtime is running.
    pub fn spawn(self, interval: Duration) -> Result<SimulatorHandle, CoreError> {
        self.spawn_with_rng(interval, StdRng::from_entropy())
    }

    /// Like [`PriceSimulator::spawn`] with an explicit RNG.
    pub fn spawn_with_rng<R>(
        mut self,
        interval: Duration,
        mut rng: R,
    ) -> Result<SimulatorHandle, CoreError>
    where
        R: Rng + Send + 'static,
    {
        if interval.is_zero() {
            return Err(CoreError::ValidationError(
                "Simulator tick interval must be positive".into(),
            ));
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            CoreError::Config(format!("Price simulator needs a tokio runtime: {e}"))
        })?;

        let (sender, receiver) = watch::channel(self.assets.clone());
        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately; the seed is already published.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.tick_with(&mut rng);
                if sender.send(self.assets.clone()).is_err() {
                    break;
                }
            }
        });

        tracing::info!(interval_ms = interval.as_millis() as u64, "price simulator started");
        Ok(SimulatorHandle { task, receiver })
    }
}

fn step<R: Rng>(asset: &PortfolioAsset, rng: &mut R) -> PortfolioAsset {
    let price_delta = rng.gen_range(-MAX_PRICE_STEP..=MAX_PRICE_STEP);
    let price = (asset.price_usd * (1.0 + price_delta)).max(PRICE_FLOOR_USD);

    let change_delta = rng.gen_range(-MAX_CHANGE_STEP..=MAX_CHANGE_STEP);
    let change = (asset.change_24h + change_delta).clamp(-CHANGE_24H_BOUND, CHANGE_24H_BOUND);

    asset.with_price(price, change)
}

/// Owner of a running simulator task. Dropping the handle stops the timer.
#[derive(Debug)]
pub struct SimulatorHandle {
    task: JoinHandle<()>,
    receiver: watch::Receiver<Vec<PortfolioAsset>>,
}

impl SimulatorHandle {
    /// New receiver notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<Vec<PortfolioAsset>> {
        self.receiver.clone()
    }

    /// Most recently published portfolio.
    #[must_use]
    pub fn latest(&self) -> Vec<PortfolioAsset> {
        self.receiver.borrow().clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the simulator. Equivalent to dropping the handle.
    pub fn stop(self) {}
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::info!("price simulator stopped");
    }
}
