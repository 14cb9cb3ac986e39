// ═══════════════════════════════════════════════════════════════════
// Progress Tests — completion set, percentages, auto-complete policy
// ═══════════════════════════════════════════════════════════════════

use std::sync::Arc;

use dapper_core::catalog::default_tutorials;
use dapper_core::models::tutorial::{AutoCompletePolicy, Tutorial, TutorialMedia};
use dapper_core::services::progress_service::{categories, ProgressService};
use dapper_core::storage::memory::MemoryStore;
use dapper_core::storage::repository::ProfileRepository;
use dapper_core::storage::traits::KeyValueStore;

fn open_progress(store: Arc<MemoryStore>) -> ProgressService {
    ProgressService::open(ProfileRepository::with_default_namespace(store)).unwrap()
}

fn video(id: &str) -> Tutorial {
    Tutorial::new(
        id,
        format!("Video {id}"),
        "",
        "Basics",
        TutorialMedia::Video {
            url: "https://example.com/v".into(),
        },
    )
}

// ═══════════════════════════════════════════════════════════════════
// set_completion
// ═══════════════════════════════════════════════════════════════════

mod completion {
    use super::*;

    #[test]
    fn starts_empty() {
        let progress = open_progress(Arc::new(MemoryStore::new()));
        assert!(progress.completed_ids().is_empty());
        assert_eq!(progress.percent_complete(&default_tutorials()), 0.0);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("1", true).unwrap();
        progress.set_completion("1", true).unwrap();

        assert_eq!(progress.completed_ids().len(), 1);
        assert!(progress.is_completed("1"));
    }

    #[test]
    fn unmarking_absent_id_is_a_noop() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("3", false).unwrap();
        assert!(progress.completed_ids().is_empty());
    }

    #[test]
    fn unmark_after_mark() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("2", true).unwrap();
        progress.set_completion("2", false).unwrap();
        assert!(!progress.is_completed("2"));
    }

    #[test]
    fn every_call_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut progress = open_progress(store.clone());

        progress.set_completion("1", true).unwrap();
        assert_eq!(
            store.get("cryptoDapperTutorialProgress").unwrap().as_deref(),
            Some(r#"["1"]"#)
        );

        progress.set_completion("1", false).unwrap();
        assert_eq!(
            store.get("cryptoDapperTutorialProgress").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn survives_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut progress = open_progress(store.clone());
            progress.set_completion("1", true).unwrap();
            progress.set_completion("4", true).unwrap();
        }
        let progress = open_progress(store);
        assert!(progress.is_completed("1"));
        assert!(progress.is_completed("4"));
        assert!(!progress.is_completed("2"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Percentages & counts
// ═══════════════════════════════════════════════════════════════════

mod percentages {
    use super::*;

    #[test]
    fn two_of_five_is_forty_percent() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("1", true).unwrap();
        progress.set_completion("3", true).unwrap();

        let catalog = default_tutorials();
        assert_eq!(progress.completed_count(&catalog), 2);
        assert!((progress.percent_complete(&catalog) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn empty_catalog_is_zero_percent() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("1", true).unwrap();
        assert_eq!(progress.percent_complete(&[]), 0.0);
    }

    #[test]
    fn dangling_ids_are_kept_but_not_counted() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("cryptoDapperTutorialProgress", r#"["1","retired-42"]"#)
            .unwrap();
        let progress = open_progress(store);

        let catalog = default_tutorials();
        assert!(progress.is_completed("retired-42"));
        assert_eq!(progress.completed_count(&catalog), 1);
        assert!((progress.percent_complete(&catalog) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn all_complete_is_one_hundred() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        let catalog = default_tutorials();
        for t in &catalog {
            progress.set_completion(&t.id, true).unwrap();
        }
        assert!((progress.percent_complete(&catalog) - 100.0).abs() < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════
// open_tutorial
// ═══════════════════════════════════════════════════════════════════

mod open_tutorial {
    use super::*;

    #[test]
    fn video_auto_completes_on_open() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        let opened = progress
            .open_tutorial(&video("v1"), AutoCompletePolicy::OnVideoOpen)
            .unwrap();

        assert!(opened.auto_completed);
        assert!(opened.media.is_video());
        assert!(progress.is_completed("v1"));
    }

    #[test]
    fn reopening_completed_video_reports_no_change() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("v1", true).unwrap();

        let opened = progress
            .open_tutorial(&video("v1"), AutoCompletePolicy::OnVideoOpen)
            .unwrap();
        assert!(!opened.auto_completed);
    }

    #[test]
    fn manual_policy_never_completes() {
        let store = Arc::new(MemoryStore::new());
        let mut progress = open_progress(store.clone());

        let opened = progress
            .open_tutorial(&video("v1"), AutoCompletePolicy::Manual)
            .unwrap();
        assert!(!opened.auto_completed);
        assert!(!progress.is_completed("v1"));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn text_tutorial_is_not_auto_completed() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        let text = Tutorial::new(
            "t1",
            "Text",
            "",
            "Basics",
            TutorialMedia::Text { body: "hi".into() },
        );

        let opened = progress
            .open_tutorial(&text, AutoCompletePolicy::OnVideoOpen)
            .unwrap();
        assert!(!opened.auto_completed);
        assert_eq!(opened.media, TutorialMedia::Text { body: "hi".into() });
    }
}

// ═══════════════════════════════════════════════════════════════════
// Views & categories
// ═══════════════════════════════════════════════════════════════════

mod views {
    use super::*;

    #[test]
    fn views_follow_catalog_order() {
        let mut progress = open_progress(Arc::new(MemoryStore::new()));
        progress.set_completion("2", true).unwrap();

        let catalog = default_tutorials();
        let views = progress.views(&catalog);
        let ids: Vec<&str> = views.iter().map(|v| v.tutorial.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert!(views[1].completed);
        assert!(!views[0].completed);
    }

    #[test]
    fn category_filter() {
        let progress = open_progress(Arc::new(MemoryStore::new()));
        let catalog = default_tutorials();
        let features = progress.views_in_category(&catalog, "Platform Features");
        assert_eq!(features.len(), 2);
        assert!(progress.views_in_category(&catalog, "Nope").is_empty());
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let catalog = default_tutorials();
        assert_eq!(
            categories(&catalog),
            ["Security", "Basics", "Platform Features", "Concepts"]
        );
    }
}
