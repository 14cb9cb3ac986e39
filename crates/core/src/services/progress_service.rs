use std::collections::BTreeSet;

use crate::errors::CoreError;
use crate::models::tutorial::{AutoCompletePolicy, OpenedTutorial, Tutorial, TutorialView};
use crate::storage::repository::{LoadOutcome, ProfileRepository};

/// Tracks which tutorials a profile has completed.
///
/// Completion lives only in this set; tutorials themselves are read-only
/// catalog records. Ids with no catalog entry are kept but never counted.
pub struct ProgressService {
    repository: ProfileRepository,
    completed: BTreeSet<String>,
}

impl std::fmt::Debug for ProgressService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressService")
            .field("completed", &self.completed)
            .finish()
    }
}

impl ProgressService {
    pub fn open(repository: ProfileRepository) -> Result<Self, CoreError> {
        let completed = match repository.load_progress()? {
            LoadOutcome::Existing(set) => set,
            LoadOutcome::FirstRun => BTreeSet::new(),
        };
        Ok(Self {
            repository,
            completed,
        })
    }

    /// Mark or unmark a tutorial. Idempotent both ways; the full set is
    /// persisted after every call.
    pub fn set_completion(&mut self, id: &str, is_complete: bool) -> Result<(), CoreError> {
        let mut next = self.completed.clone();
        if is_complete {
            next.insert(id.to_string());
        } else {
            next.remove(id);
        }

        self.repository.save_progress(&next)?;
        self.completed = next;
        tracing::info!(tutorial_id = id, completed = is_complete, "tutorial progress updated");
        Ok(())
    }

    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn completed_ids(&self) -> &BTreeSet<String> {
        &self.completed
    }

    /// Number of catalog tutorials that are completed (dangling ids excluded).
    #[must_use]
    pub fn completed_count(&self, catalog: &[Tutorial]) -> usize {
        catalog
            .iter()
            .filter(|t| self.completed.contains(&t.id))
            .count()
    }

    /// `completed / catalog × 100`; 0 for an empty catalog.
    #[must_use]
    pub fn percent_complete(&self, catalog: &[Tutorial]) -> f64 {
        if catalog.is_empty() {
            return 0.0;
        }
        self.completed_count(catalog) as f64 / catalog.len() as f64 * 100.0
    }

    /// Open a tutorial for viewing. Under [`AutoCompletePolicy::OnVideoOpen`],
    /// opening an uncompleted video tutorial marks it complete.
    pub fn open_tutorial(
        &mut self,
        tutorial: &Tutorial,
        policy: AutoCompletePolicy,
    ) -> Result<OpenedTutorial, CoreError> {
        let should_complete = policy == AutoCompletePolicy::OnVideoOpen
            && tutorial.media.is_video()
            && !self.is_completed(&tutorial.id);

        if should_complete {
            self.set_completion(&tutorial.id, true)?;
        }

        Ok(OpenedTutorial {
            id: tutorial.id.clone(),
            media: tutorial.media.clone(),
            auto_completed: should_complete,
        })
    }

    /// Catalog joined with completion flags, in catalog order.
    #[must_use]
    pub fn views<'a>(&self, catalog: &'a [Tutorial]) -> Vec<TutorialView<'a>> {
        catalog
            .iter()
            .map(|tutorial| TutorialView {
                tutorial,
                completed: self.completed.contains(&tutorial.id),
            })
            .collect()
    }

    /// Views restricted to one category.
    #[must_use]
    pub fn views_in_category<'a>(
        &self,
        catalog: &'a [Tutorial],
        category: &str,
    ) -> Vec<TutorialView<'a>> {
        self.views(catalog)
            .into_iter()
            .filter(|v| v.tutorial.category == category)
            .collect()
    }
}

/// Distinct categories in first-appearance order.
#[must_use]
pub fn categories(catalog: &[Tutorial]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    catalog
        .iter()
        .filter(|t| seen.insert(t.category.as_str()))
        .map(|t| t.category.as_str())
        .collect()
}
