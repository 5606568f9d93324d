#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tempfile::TempDir;

    use howto_app::{
        App, Clipboard, MemorySink, MetadataSink, NoopClipboard, Section, ShareOutcome,
        ShareRequest, ShareTarget, View, RANDOM_SKILLS,
    };
    use howto_config::HowToConfig;
    use howto_core::{Difficulty, HowToError, Result};
    use howto_gen::{FixedEstimator, MockBackend, TutorialService};
    use howto_store::SavedSkillStore;

    // ── Test doubles ───────────────────────────────────────────

    /// Clipboard that records every write.
    struct CaptureClipboard {
        texts: Arc<Mutex<Vec<String>>>,
    }

    impl Clipboard for CaptureClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.texts.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Share target that records requests, optionally refusing them.
    struct RecordingShareTarget {
        requests: Arc<Mutex<Vec<ShareRequest>>>,
        fail: bool,
    }

    impl ShareTarget for RecordingShareTarget {
        fn share(&mut self, request: &ShareRequest) -> Result<()> {
            if self.fail {
                return Err(HowToError::Share("share sheet dismissed".into()));
            }
            self.requests.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    /// Sink whose structured-data slot is broken. Title and description
    /// behave normally, so construction succeeds and the failure lands
    /// mid-way through skill entry.
    #[derive(Default)]
    struct BrokenStructuredDataSink {
        inner: MemorySink,
    }

    impl MetadataSink for BrokenStructuredDataSink {
        fn set_title(&mut self, title: &str) -> Result<()> {
            self.inner.set_title(title)
        }
        fn set_description(&mut self, description: &str) -> Result<()> {
            self.inner.set_description(description)
        }
        fn set_structured_data(&mut self, _json_ld: &str) -> Result<()> {
            Err(HowToError::Page("structured data slot unavailable".into()))
        }
        fn clear_structured_data(&mut self) -> Result<()> {
            self.inner.clear_structured_data()
        }
        fn title(&self) -> Option<String> {
            self.inner.title()
        }
        fn description(&self) -> Option<String> {
            self.inner.description()
        }
        fn structured_data(&self) -> Option<String> {
            self.inner.structured_data()
        }
    }

    // ── Helpers ────────────────────────────────────────────────

    fn fixed_service() -> TutorialService {
        TutorialService::offline()
            .with_estimator(Box::new(FixedEstimator::new("5-10 minutes", Difficulty::Beginner)))
    }

    fn mock_service(backend: Arc<MockBackend>) -> TutorialService {
        TutorialService::new(backend)
            .with_estimator(Box::new(FixedEstimator::new("5-10 minutes", Difficulty::Beginner)))
    }

    fn store_in(dir: &TempDir) -> SavedSkillStore {
        SavedSkillStore::open(dir.path().join("saved_skills.json"))
    }

    fn offline_app(dir: &TempDir) -> App {
        App::new(
            HowToConfig::default(),
            fixed_service(),
            store_in(dir),
            Box::new(MemorySink::new()),
            Box::new(NoopClipboard),
        )
        .unwrap()
    }

    fn mock_app(dir: &TempDir, backend: Arc<MockBackend>) -> App {
        App::new(
            HowToConfig::default(),
            mock_service(backend),
            store_in(dir),
            Box::new(MemorySink::new()),
            Box::new(NoopClipboard),
        )
        .unwrap()
    }

    // ── Construction ───────────────────────────────────────────

    #[tokio::test]
    async fn new_app_starts_home_with_default_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);

        assert!(matches!(app.view(), View::Home));
        assert_eq!(
            app.sink().title().as_deref(),
            Some("HowTo Ninja - Learn Any Skill in Minutes")
        );
        assert!(app.sink().description().unwrap().contains("AI-powered"));
        assert!(app.sink().structured_data().is_none());
        assert_eq!(app.history().len(), 1);
        assert!(app.history().current().skill.is_none());
        assert_eq!(app.history().current().url, "https://howtoninja.com");
    }

    // ── Searching ──────────────────────────────────────────────

    #[tokio::test]
    async fn search_presents_a_tutorial() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        app.search("fold a fitted sheet").await;

        let View::Skill { query, content } = app.view() else {
            panic!("expected skill view, got {}", app.view().name());
        };
        assert_eq!(query, "fold a fitted sheet");
        assert!(content.content.starts_with("<h1>How to Fold a fitted sheet</h1>"));
        assert_eq!(content.estimated_time, "5-10 minutes");
        assert_eq!(app.active_query(), Some("fold a fitted sheet"));

        // Page metadata follows the generated markup.
        assert_eq!(
            app.sink().title().as_deref(),
            Some("How to Fold a fitted sheet | HowTo Ninja - Learn Any Skill")
        );
        let description = app.sink().description().unwrap();
        assert!(description.starts_with("Master the art of fold a fitted sheet"));
        assert_eq!(description.chars().count(), 155);
        assert!(description.ends_with("..."));

        // History entry carries the query, not the slug.
        assert_eq!(app.history().len(), 2);
        let entry = app.history().current();
        assert_eq!(entry.skill.as_deref(), Some("fold a fitted sheet"));
        assert_eq!(entry.url, "https://howtoninja.com/how-to-fold-a-fitted-sheet");
    }

    #[tokio::test]
    async fn search_publishes_structured_data() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        app.search("tie a tie").await;

        let raw = app.sink().structured_data().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["@type"], "HowTo");
        assert_eq!(json["name"], "How to Tie a tie");
        assert_eq!(json["totalTime"], "5-10 minutes");
        assert_eq!(json["step"].as_array().unwrap().len(), 6);
        assert_eq!(json["step"][0]["@type"], "HowToStep");
        assert_eq!(json["step"][0]["position"], 1);
        assert_eq!(
            json["step"][0]["url"],
            "https://howtoninja.com/how-to-tie-a-tie#step-1"
        );
    }

    #[tokio::test]
    async fn missing_markup_pieces_fall_back_to_the_query() {
        let backend = Arc::new(
            MockBackend::new()
                .with_markup("<p>Just an intro.</p>")
                .with_markup("<div>nothing useful</div>"),
        );
        let dir = tempfile::tempdir().unwrap();
        let mut app = mock_app(&dir, backend);

        app.search("sharpen a knife").await;
        assert_eq!(
            app.sink().title().as_deref(),
            Some("sharpen a knife | HowTo Ninja - Learn Any Skill")
        );
        assert_eq!(app.sink().description().as_deref(), Some("Just an intro."));

        app.search("sharpen a knife").await;
        assert_eq!(
            app.sink().description().as_deref(),
            Some("Learn sharpen a knife with step-by-step instructions")
        );
    }

    #[tokio::test]
    async fn presentation_failure_resolves_to_home() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            HowToConfig::default(),
            fixed_service(),
            store_in(&dir),
            Box::new(BrokenStructuredDataSink::default()),
            Box::new(NoopClipboard),
        )
        .unwrap();

        app.search("tie a tie").await;

        assert!(matches!(app.view(), View::Home));
        assert!(app.active_query().is_none());
        // Nothing was pushed for the failed entry.
        assert_eq!(app.history().len(), 1);
    }

    // ── Navigation ─────────────────────────────────────────────

    #[tokio::test]
    async fn navigate_home_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        app.search("tie a tie").await;
        app.navigate(Section::Home).await.unwrap();

        assert!(matches!(app.view(), View::Home));
        assert!(app.active_query().is_none());
        assert_eq!(
            app.sink().title().as_deref(),
            Some("HowTo Ninja - Learn Any Skill in Minutes")
        );
        assert!(app.sink().structured_data().is_none());
        assert_eq!(app.history().len(), 3);
        assert!(app.history().current().skill.is_none());
        assert_eq!(app.history().current().url, "https://howtoninja.com");
    }

    #[tokio::test]
    async fn navigate_categories_shows_the_library() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        app.search("tie a tie").await;
        app.navigate(Section::Categories).await.unwrap();

        assert!(matches!(app.view(), View::Library));
        // The last query stays active; only home clears it.
        assert_eq!(app.active_query(), Some("tie a tie"));
        assert!(app.sink().structured_data().is_none());
    }

    #[tokio::test]
    async fn navigate_random_searches_a_pool_query() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        app.navigate(Section::Random).await.unwrap();

        let View::Skill { query, .. } = app.view() else {
            panic!("expected skill view");
        };
        let skill = query.strip_prefix("How to ").expect("random query is prefixed");
        assert!(RANDOM_SKILLS.contains(&skill));
        assert_eq!(app.history().len(), 2);
    }

    // ── Back / forward ─────────────────────────────────────────

    #[tokio::test]
    async fn back_regenerates_instead_of_restoring() {
        let backend = Arc::new(
            MockBackend::new()
                .with_markup("<h1>First take</h1><p>One.</p>")
                .with_markup("<h1>Second take</h1><p>Two.</p>"),
        );
        let dir = tempfile::tempdir().unwrap();
        let mut app = mock_app(&dir, backend.clone());

        app.search("tie a tie").await;
        app.navigate(Section::Home).await.unwrap();

        assert!(app.back().await);

        let View::Skill { content, .. } = app.view() else {
            panic!("expected skill view after back");
        };
        assert!(content.content.contains("Second take"));
        assert_eq!(backend.call_count(), 2);
        assert_eq!(
            backend.recorded_queries(),
            vec!["tie a tie".to_string(), "tie a tie".to_string()]
        );
        // The replay pushed a fresh entry over the forward tail.
        assert_eq!(app.history().len(), 3);
        assert!(!app.history().can_go_forward());
    }

    #[tokio::test]
    async fn back_to_the_root_goes_home_without_regenerating() {
        let backend = Arc::new(MockBackend::new().with_markup("<h1>Only take</h1>"));
        let dir = tempfile::tempdir().unwrap();
        let mut app = mock_app(&dir, backend.clone());

        app.search("tie a tie").await;
        assert!(app.back().await);

        assert!(matches!(app.view(), View::Home));
        assert!(app.active_query().is_none());
        assert_eq!(backend.call_count(), 1);
        assert!(app.sink().structured_data().is_none());
        assert!(app.history().can_go_forward());
    }

    #[tokio::test]
    async fn forward_replays_the_query_too() {
        let backend = Arc::new(
            MockBackend::new()
                .with_markup("<h1>First take</h1>")
                .with_markup("<h1>Second take</h1>"),
        );
        let dir = tempfile::tempdir().unwrap();
        let mut app = mock_app(&dir, backend.clone());

        app.search("tie a tie").await;
        app.back().await;
        assert!(app.forward().await);

        assert!(app.view().is_skill());
        assert_eq!(backend.call_count(), 2);
    }

    #[tokio::test]
    async fn back_at_the_root_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        assert!(!app.back().await);
        assert!(!app.forward().await);
        assert!(matches!(app.view(), View::Home));
    }

    // ── Saving ─────────────────────────────────────────────────

    #[tokio::test]
    async fn save_appends_the_open_tutorial() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir);

        app.search("grow herbs").await;
        app.save().unwrap();
        app.save().unwrap();

        let records = app.store().list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].query, "grow herbs");
        assert!(records[0].content.contains("<h1>How to Grow herbs</h1>"));
    }

    #[tokio::test]
    async fn save_outside_a_tutorial_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);

        let err = app.save().unwrap_err();
        assert!(err.to_string().contains("no tutorial is open"));
    }

    // ── Sharing ────────────────────────────────────────────────

    #[tokio::test]
    async fn share_prefers_the_native_target() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let dir = tempfile::tempdir().unwrap();
        let mut app = offline_app(&dir).with_share_target(Box::new(RecordingShareTarget {
            requests: requests.clone(),
            fail: false,
        }));

        app.search("tie a tie").await;
        let outcome = app.share().unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        let recorded = requests.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].title, "How to tie a tie - HowTo Ninja");
        assert_eq!(
            recorded[0].text,
            "Learn how to tie a tie with this step-by-step guide!"
        );
        assert_eq!(recorded[0].url, "https://howtoninja.com/how-to-tie-a-tie");
    }

    #[tokio::test]
    async fn share_falls_back_to_the_clipboard_on_native_failure() {
        let texts = Arc::new(Mutex::new(Vec::new()));
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            HowToConfig::default(),
            fixed_service(),
            store_in(&dir),
            Box::new(MemorySink::new()),
            Box::new(CaptureClipboard { texts: texts.clone() }),
        )
        .unwrap()
        .with_share_target(Box::new(RecordingShareTarget {
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }));

        app.search("tie a tie").await;
        let outcome = app.share().unwrap();

        assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
        let copied = texts.lock().unwrap();
        assert_eq!(copied.len(), 1);
        assert_eq!(copied[0], "https://howtoninja.com/how-to-tie-a-tie");
    }

    #[tokio::test]
    async fn share_without_a_target_copies_the_current_url() {
        let texts = Arc::new(Mutex::new(Vec::new()));
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            HowToConfig::default(),
            fixed_service(),
            store_in(&dir),
            Box::new(MemorySink::new()),
            Box::new(CaptureClipboard { texts: texts.clone() }),
        )
        .unwrap();

        // Straight from home: the root URL is what gets copied.
        let outcome = app.share().unwrap();

        assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
        let copied = texts.lock().unwrap();
        assert_eq!(copied.len(), 1);
        assert_eq!(copied[0], "https://howtoninja.com");
    }
}
