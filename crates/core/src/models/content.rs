use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A frequently-asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Case-insensitive match against question and answer.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.question.to_lowercase().contains(&q) || self.answer.to_lowercase().contains(&q)
    }
}

/// An educational blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: NaiveDate,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}
