//! Drives the whole app the way the REPL does, against a canned backend.

use std::sync::Arc;

use dictionary::mock::{MockBackend, MockCall};
use dictionary::Dictionary;
use lexicon_master::app::NOT_FOUND_MESSAGE;
use lexicon_master::notebook::{NotebookView, QuizState, Submission};
use lexicon_master::storage::{KeyValueStore, MemoryStore, Storage, SAVED_WORDS_KEY};
use lexicon_master::{App, MainView, Outcome, SavedWords};
use rand::{rngs::StdRng, SeedableRng};
use tempfile::TempDir;

const EPHEMERAL: &str = include_str!("fixtures/ephemeral.json");
const GRADED: &str = r#"{
    "isCorrect": true,
    "feedback": "完全正确，ephemeral 指短暂的、转瞬即逝的。",
    "etymologyNote": "epi- 加 hemera（一天），本义是“只存在一天”。"
}"#;

fn db_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("lexicon.db").display())
}

async fn sqlite_app(dir: &TempDir, backend: MockBackend) -> App {
    let storage = Storage::initialize(&db_url(dir)).await.unwrap();
    let saved = SavedWords::load(storage).await.unwrap();
    App::new(Dictionary::new(backend), saved).with_rng(StdRng::seed_from_u64(11))
}

#[tokio::test]
async fn search_save_and_quiz() {
    let dir = TempDir::new().unwrap();
    let backend = MockBackend::new()
        .with_analysis("ephemeral", EPHEMERAL)
        .with_evaluation(GRADED);
    let calls = backend.calls();
    let mut app = sqlite_app(&dir, backend).await;

    // search
    assert_eq!(app.submit("ephemeral").await.unwrap(), Outcome::Searched);
    let record = app.record().expect("record should be loaded");
    assert_eq!(record.word, "ephemeral");
    assert_eq!(record.usage.examples.literature.source, "Adonais");
    assert!(matches!(app.view(), MainView::Loaded(_)));

    // save through the command interpreter
    assert_eq!(
        app.submit("/add").await.unwrap(),
        Outcome::Saved("ephemeral".to_string())
    );
    assert_eq!(app.saved().words(), &["ephemeral".to_string()]);

    // open the notebook, it starts on the list
    assert_eq!(app.submit("/test").await.unwrap(), Outcome::NotebookOpened);
    assert_eq!(app.notebook().unwrap().view(), &NotebookView::List);

    // quiz
    assert!(app.start_quiz());
    assert_eq!(
        app.notebook().unwrap().quiz().map(QuizState::word),
        Some("ephemeral")
    );
    assert_eq!(app.submit_quiz_answer("short-lived").await, Submission::Graded);
    match app.notebook().unwrap().quiz() {
        Some(QuizState::Graded { outcome, .. }) => {
            assert!(outcome.is_correct);
            assert!(outcome.feedback.starts_with("完全正确"));
        }
        other => panic!("expected graded quiz, got {other:?}"),
    }

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            MockCall::Analyze("ephemeral".to_string()),
            MockCall::Evaluate {
                target_word: "ephemeral".to_string(),
                user_answer: "short-lived".to_string(),
            },
        ]
    );

    // closing the notebook leaves the main view as it was
    app.close_notebook();
    assert!(matches!(app.view(), MainView::Loaded(_)));
}

#[tokio::test]
async fn saved_words_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = sqlite_app(&dir, MockBackend::new()).await;
        app.submit("/add Laconic").await.unwrap();
        app.submit("/add ephemeral").await.unwrap();
        app.toggle_save("laconic").await.unwrap();
        app.toggle_save("ubiquitous").await.unwrap();
    }

    let app = sqlite_app(&dir, MockBackend::new()).await;
    assert_eq!(
        app.saved().words(),
        &["ephemeral".to_string(), "ubiquitous".to_string()]
    );
}

#[tokio::test]
async fn malformed_analysis_shows_the_fixed_message() {
    let backend = MockBackend::new().with_analysis("ephemeral", r#"{"word": "ephemeral"}"#);
    let saved = SavedWords::load(MemoryStore::new()).await.unwrap();
    let mut app = App::new(Dictionary::new(backend), saved);

    app.submit("ephemeral").await.unwrap();
    assert_eq!(app.view(), &MainView::Error(NOT_FOUND_MESSAGE.to_string()));
    assert!(app.record().is_none());

    // nothing loaded, so /add has nothing to save
    assert_eq!(app.submit("/add").await.unwrap(), Outcome::Nothing);
    assert!(app.saved().is_empty());
}

#[tokio::test]
async fn list_and_test_are_interchangeable() {
    let mut views = Vec::new();
    for command in ["/list", "/test"] {
        let saved = SavedWords::load(MemoryStore::new()).await.unwrap();
        let mut app = App::new(Dictionary::new(MockBackend::new()), saved);
        app.submit("/add ephemeral").await.unwrap();
        app.submit(command).await.unwrap();
        views.push(app.notebook().unwrap().view().clone());
    }
    assert_eq!(views[0], views[1]);
    assert_eq!(views[0], NotebookView::List);
}

#[tokio::test]
async fn grading_failure_can_be_retried() {
    let store = Arc::new(MemoryStore::with_value(SAVED_WORDS_KEY, r#"["ephemeral"]"#));
    let saved = SavedWords::load(Arc::clone(&store)).await.unwrap();
    let backend = MockBackend::new().with_evaluation("");
    let calls = backend.calls();
    let mut app = App::new(Dictionary::new(backend), saved);

    app.open_notebook();
    assert!(app.start_quiz());
    assert_eq!(app.submit_quiz_answer("short-lived").await, Submission::Failed);
    assert_eq!(app.submit_quiz_answer("lasting a day").await, Submission::Failed);
    match app.notebook().unwrap().quiz() {
        Some(QuizState::AwaitingAnswer { word, error }) => {
            assert_eq!(word, "ephemeral");
            assert!(error.is_some());
        }
        other => panic!("expected the question to stay open, got {other:?}"),
    }
    assert_eq!(calls.lock().unwrap().len(), 2);

    // grading never touches the notebook itself
    assert_eq!(
        store.get(SAVED_WORDS_KEY).await.unwrap().as_deref(),
        Some(r#"["ephemeral"]"#)
    );
}

#[tokio::test]
async fn corrupt_notebook_fails_startup() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::initialize(&db_url(&dir)).await.unwrap();
    storage.set(SAVED_WORDS_KEY, "{ephemeral").await.unwrap();

    assert!(SavedWords::load(storage).await.is_err());
}
