use serde::{Deserialize, Serialize};

/// What a tutorial shows when opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialMedia {
    /// Opens an external video
    Video { url: String },
    /// Inline text body
    Text { body: String },
    /// Content coming soon
    None,
}

impl TutorialMedia {
    pub fn is_video(&self) -> bool {
        matches!(self, TutorialMedia::Video { .. })
    }
}

/// A catalog tutorial. Completion is not stored here; it lives in the
/// progress tracker's completed-id set and is joined in via [`TutorialView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Grouping shown as tabs (e.g., "Security", "Basics")
    pub category: String,
    pub media: TutorialMedia,
}

impl Tutorial {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        media: TutorialMedia,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            media,
        }
    }
}

/// A tutorial joined with its derived completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorialView<'a> {
    pub tutorial: &'a Tutorial,
    pub completed: bool,
}

/// Whether opening a video tutorial marks it complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoCompletePolicy {
    /// Engagement implies completion
    #[default]
    OnVideoOpen,
    /// Only the explicit checkbox changes completion
    Manual,
}

/// What the caller should present after opening a tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedTutorial {
    pub id: String,
    pub media: TutorialMedia,
    /// `true` if this open call added the tutorial to the completed set
    pub auto_completed: bool,
}
