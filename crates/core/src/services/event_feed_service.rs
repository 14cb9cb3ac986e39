use chrono::NaiveDate;
use std::time::Duration;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::event::{CryptoEvent, EventPriority, GeneratedEvent};
use crate::providers::traits::EventProvider;

/// Turns generated events into displayable ones: fresh uuid ids,
/// `Regular` priority when unset, newest first.
///
/// Entries with a blank title or an unparseable date are dropped; a failed
/// or slow provider yields an empty feed.
pub struct EventFeedService {
    provider: Box<dyn EventProvider>,
    timeout: Duration,
}

impl EventFeedService {
    pub fn new(provider: Box<dyn EventProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub async fn fetch(&self) -> Vec<CryptoEvent> {
        match self.try_fetch().await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "event feed degraded to empty list"
                );
                Vec::new()
            }
        }
    }

    /// Like [`EventFeedService::fetch`] but surfaces provider failures and timeouts.
    pub async fn try_fetch(&self) -> Result<Vec<CryptoEvent>, CoreError> {
        let raw = tokio::time::timeout(self.timeout, self.provider.generate_events())
            .await
            .map_err(|_| CoreError::Timeout(self.timeout.as_millis() as u64))??;

        let mut events: Vec<CryptoEvent> = raw.into_iter().filter_map(to_event).collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }
}

fn to_event(generated: GeneratedEvent) -> Option<CryptoEvent> {
    let title = generated.title.trim();
    if title.is_empty() {
        tracing::debug!("dropping generated event without a title");
        return None;
    }
    let date = match NaiveDate::parse_from_str(generated.date.trim(), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            tracing::debug!(date = %generated.date, "dropping generated event with bad date");
            return None;
        }
    };

    let mut event = CryptoEvent::new(Uuid::new_v4().to_string(), title, date)
        .with_priority(generated.priority.unwrap_or(EventPriority::Regular));
    if let Some(description) = generated.description.filter(|d| !d.trim().is_empty()) {
        event = event.with_description(description);
    }
    Some(event)
}
