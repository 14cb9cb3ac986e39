use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How prominently an event is displayed in the ticker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    High,
    #[default]
    Regular,
}

impl std::fmt::Display for EventPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventPriority::High => write!(f, "high"),
            EventPriority::Regular => write!(f, "regular"),
        }
    }
}

/// A news-style crypto event (mock feed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: EventPriority,
    /// Optional link to a blog post or external source
    #[serde(default)]
    pub link: Option<String>,
}

impl CryptoEvent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            description: None,
            priority: EventPriority::Regular,
            link: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: EventPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// An event as a generative model returns it: no id yet, date still text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEvent {
    pub title: String,
    /// Expected as `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<EventPriority>,
}
