use std::collections::HashSet;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::tutorial::Tutorial;
use crate::providers::traits::{CatalogEntry, RecommendationProvider};

/// Asks a generative-model provider for tutorials matching a free-text
/// interest, and keeps only answers that name real catalog tutorials.
///
/// The provider is called once per request, bounded by `timeout`. No retries.
pub struct RecommendationService {
    provider: Box<dyn RecommendationProvider>,
    timeout: Duration,
    max_results: usize,
}

impl RecommendationService {
    pub fn new(
        provider: Box<dyn RecommendationProvider>,
        timeout: Duration,
        max_results: usize,
    ) -> Self {
        Self {
            provider,
            timeout,
            max_results: max_results.max(1),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Recommend tutorial titles. Provider failures and timeouts degrade to
    /// an empty list; only invalid input is an error.
    pub async fn recommend(
        &self,
        interest: &str,
        tutorials: &[Tutorial],
    ) -> Result<Vec<String>, CoreError> {
        match self.try_recommend(interest, tutorials).await {
            Ok(titles) => Ok(titles),
            Err(e @ CoreError::ValidationError(_)) => Err(e),
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "recommendation degraded to empty list"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Like [`RecommendationService::recommend`] but surfaces
    /// `ProviderFailure` / `Timeout` instead of degrading.
    pub async fn try_recommend(
        &self,
        interest: &str,
        tutorials: &[Tutorial],
    ) -> Result<Vec<String>, CoreError> {
        let interest = interest.trim();
        if interest.is_empty() {
            return Err(CoreError::ValidationError(
                "Please describe your feature usage or interests".into(),
            ));
        }
        if tutorials.is_empty() {
            return Ok(Vec::new());
        }

        let catalog: Vec<CatalogEntry> = tutorials.iter().map(CatalogEntry::from).collect();

        let raw = tokio::time::timeout(self.timeout, self.provider.recommend(interest, &catalog))
            .await
            .map_err(|_| CoreError::Timeout(self.timeout.as_millis() as u64))??;

        Ok(self.filter_to_catalog(&raw, tutorials))
    }

    /// Keep titles present in the catalog (case-insensitive), in provider
    /// order, de-duplicated, capped at `max_results`. Returns catalog spelling.
    fn filter_to_catalog(&self, raw: &[String], tutorials: &[Tutorial]) -> Vec<String> {
        let mut seen = HashSet::new();
        raw.iter()
            .filter_map(|title| {
                let wanted = title.trim().to_lowercase();
                tutorials
                    .iter()
                    .find(|t| t.title.to_lowercase() == wanted)
                    .map(|t| t.title.clone())
            })
            .filter(|title| seen.insert(title.clone()))
            .take(self.max_results)
            .collect()
    }
}
