//! End-to-end flows through `update` and the command executor.

use std::collections::VecDeque;
use std::sync::Mutex;

use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::tempdir;

use gopt::action::Action;
use gopt::app::{App, AppState};
use gopt::command::{execute_command, Command, Services};
use gopt::domain::catalog::ModelCatalog;
use gopt::domain::error::FetchError;
use gopt::domain::store::{ConfigStore, FileStore, MemoryStore};
use gopt::domain::types::{ConfigRecord, ModelOption, PromptRecord};
use gopt::update;

/// Catalog that answers from a canned result and records the keys it saw.
struct StubCatalog {
    models: Option<Vec<&'static str>>,
    seen_keys: Mutex<Vec<String>>,
}

impl StubCatalog {
    fn ok(models: Vec<&'static str>) -> Self {
        Self {
            models: Some(models),
            seen_keys: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            models: None,
            seen_keys: Mutex::new(Vec::new()),
        }
    }
}

impl ModelCatalog for StubCatalog {
    async fn fetch_models(&self, api_key: &str) -> Result<Vec<ModelOption>, FetchError> {
        self.seen_keys.lock().unwrap().push(api_key.to_string());
        match &self.models {
            Some(ids) => Ok(ids
                .iter()
                .map(|id| ModelOption::from_id(id.to_string()))
                .collect()),
            None => Err(FetchError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        }
    }
}

/// Run commands until none are left, feeding results back into `update`.
async fn drain<S: ConfigStore, C: ModelCatalog>(
    app: &mut App,
    services: &Services<S, C>,
    commands: Vec<Command>,
) {
    let mut pending: VecDeque<Command> = commands.into();
    while let Some(command) = pending.pop_front() {
        let action = execute_command(command, services).await;
        pending.extend(update::update(app, action));
    }
}

async fn open<S: ConfigStore, C: ModelCatalog>(services: &Services<S, C>) -> App {
    let mut app = App::new(ConfigRecord::default());
    let commands = update::init(&mut app);
    drain(&mut app, services, commands).await;
    app
}

async fn press<S: ConfigStore, C: ModelCatalog>(
    app: &mut App,
    services: &Services<S, C>,
    code: KeyCode,
) {
    press_with(app, services, code, KeyModifiers::NONE).await;
}

async fn press_with<S: ConfigStore, C: ModelCatalog>(
    app: &mut App,
    services: &Services<S, C>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    let commands = update::update(app, Action::Input { code, modifiers });
    drain(app, services, commands).await;
}

async fn type_text<S: ConfigStore, C: ModelCatalog>(
    app: &mut App,
    services: &Services<S, C>,
    text: &str,
) {
    for c in text.chars() {
        press(app, services, KeyCode::Char(c)).await;
    }
}

async fn add_prompt<S: ConfigStore, C: ModelCatalog>(
    app: &mut App,
    services: &Services<S, C>,
    title: &str,
    text: &str,
) {
    press(app, services, KeyCode::Char('a')).await;
    type_text(app, services, title).await;
    press(app, services, KeyCode::Enter).await;
    type_text(app, services, text).await;
    press(app, services, KeyCode::Esc).await;
}

fn memory_services(store: MemoryStore) -> Services<MemoryStore, StubCatalog> {
    Services {
        store,
        catalog: StubCatalog::ok(vec!["m1", "m2"]),
    }
}

fn prompt(id: &str, title: &str, text: &str) -> PromptRecord {
    PromptRecord {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
    }
}

#[tokio::test]
async fn test_fresh_install_shows_defaults() {
    let services = memory_services(MemoryStore::new());

    let app = open(&services).await;

    assert_eq!(app.state, AppState::Browsing);
    assert_eq!(app.api_key, "");
    assert_eq!(app.llm_model, "llama3-8b-8192");
    assert!(app.prompts.is_empty());
    assert_eq!(services.store.write_count(), 0);
}

#[tokio::test]
async fn test_add_save_reload_keeps_prompt_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.json");
    let services = Services {
        store: FileStore::new(&path),
        catalog: StubCatalog::ok(Vec::new()),
    };

    let mut app = open(&services).await;
    add_prompt(&mut app, &services, "Summarize", "Summarize the page.").await;
    press(&mut app, &services, KeyCode::Char('s')).await;
    assert!(!app.dirty);

    let reloaded = open(&services).await;

    assert_eq!(reloaded.prompts.len(), 1);
    let row = &reloaded.prompts.rows()[0];
    assert_eq!(row.title, "Summarize");
    assert_eq!(row.id(), "summarize");
    assert_eq!(row.text, "Summarize the page.");
}

#[tokio::test]
async fn test_round_trip_with_non_ascii_and_empty_values() {
    let record = ConfigRecord {
        api_key: "clé-🔑".to_string(),
        llm_model: String::new(),
        prompts: vec![prompt("übersicht", "Übersicht", ""), prompt("", "", "只是文字")],
    };
    let services = memory_services(MemoryStore::with_record(record.clone()));

    let mut app = open(&services).await;
    press(&mut app, &services, KeyCode::Char('s')).await;

    assert_eq!(services.store.snapshot(), Some(record.clone()));
    assert_eq!(app.to_record(), record);
}

#[tokio::test]
async fn test_reload_twice_does_not_duplicate_rows() {
    let record = ConfigRecord {
        prompts: vec![prompt("a", "A", "1"), prompt("b", "B", "2")],
        ..ConfigRecord::default()
    };
    let services = memory_services(MemoryStore::with_record(record));

    let mut app = open(&services).await;
    press(&mut app, &services, KeyCode::Char('r')).await;
    press(&mut app, &services, KeyCode::Char('r')).await;

    assert_eq!(app.prompts.len(), 2);
}

#[tokio::test]
async fn test_delete_auto_saves_remaining_rows() {
    let record = ConfigRecord {
        prompts: vec![
            prompt("one", "One", "1"),
            prompt("two", "Two", "2"),
            prompt("three", "Three", "3"),
        ],
        ..ConfigRecord::default()
    };
    let services = memory_services(MemoryStore::with_record(record));
    let mut app = open(&services).await;

    // API key, model, then the second prompt.
    for _ in 0..3 {
        press(&mut app, &services, KeyCode::Down).await;
    }
    press(&mut app, &services, KeyCode::Char('d')).await;

    let saved = services.store.snapshot().unwrap();
    assert_eq!(services.store.write_count(), 1);
    assert_eq!(
        saved.prompts,
        vec![prompt("one", "One", "1"), prompt("three", "Three", "3")]
    );
    assert_eq!(app.status.as_ref().unwrap().text, "Options saved.");
}

#[tokio::test]
async fn test_failed_delete_save_guards_quit() {
    let services = memory_services(MemoryStore::with_record(ConfigRecord {
        prompts: vec![prompt("only", "Only", "1")],
        ..ConfigRecord::default()
    }));
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Down).await;
    press(&mut app, &services, KeyCode::Down).await;
    services.store.set_failing(true);
    press(&mut app, &services, KeyCode::Char('d')).await;

    assert!(app.prompts.is_empty());
    assert_eq!(services.store.snapshot().unwrap().prompts.len(), 1);
    assert_eq!(app.status.as_ref().unwrap().text, "Error saving options.");
    assert!(app.dirty);

    press(&mut app, &services, KeyCode::Char('q')).await;
    assert!(!app.should_quit);
    assert!(app.quit_armed);
}

#[tokio::test]
async fn test_delete_without_prompt_selected_does_nothing() {
    let services = memory_services(MemoryStore::new());
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Char('d')).await;

    assert_eq!(services.store.write_count(), 0);
}

#[tokio::test]
async fn test_edits_are_not_persisted_until_save() {
    let services = memory_services(MemoryStore::new());
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Enter).await;
    type_text(&mut app, &services, "gsk_abc").await;
    press(&mut app, &services, KeyCode::Enter).await;

    assert_eq!(app.api_key, "gsk_abc");
    assert!(app.dirty);
    assert_eq!(services.store.write_count(), 0);

    press_with(&mut app, &services, KeyCode::Char('s'), KeyModifiers::CONTROL).await;

    assert_eq!(services.store.snapshot().unwrap().api_key, "gsk_abc");
}

#[tokio::test]
async fn test_save_failure_reports_error_and_keeps_fields() {
    let services = memory_services(MemoryStore::new());
    let mut app = open(&services).await;
    add_prompt(&mut app, &services, "Draft", "text").await;
    services.store.set_failing(true);

    press(&mut app, &services, KeyCode::Char('s')).await;

    assert_eq!(app.status.as_ref().unwrap().text, "Error saving options.");
    assert_eq!(app.prompts.len(), 1);
    assert!(app.dirty);
    assert_eq!(services.store.snapshot(), None);
}

#[tokio::test]
async fn test_restore_failure_leaves_empty_fields() {
    let store = MemoryStore::new();
    store.set_failing(true);
    let services = memory_services(store);

    let app = open(&services).await;

    assert_eq!(app.state, AppState::Browsing);
    assert_eq!(app.llm_model, "");
    assert!(
        app.status
            .as_ref()
            .unwrap()
            .text
            .starts_with("Error restoring options")
    );
}

#[tokio::test]
async fn test_failed_reload_keeps_current_fields() {
    let services = memory_services(MemoryStore::with_record(ConfigRecord {
        api_key: "gsk_kept".to_string(),
        llm_model: "m1".to_string(),
        prompts: vec![prompt("a", "A", "1")],
    }));
    let mut app = open(&services).await;
    services.store.set_failing(true);

    press(&mut app, &services, KeyCode::Char('r')).await;

    assert_eq!(app.state, AppState::Browsing);
    assert_eq!(app.api_key, "gsk_kept");
    assert_eq!(app.llm_model, "m1");
    assert_eq!(app.prompts.len(), 1);
    assert!(
        app.status
            .as_ref()
            .unwrap()
            .text
            .starts_with("Error restoring options")
    );
}

#[tokio::test]
async fn test_colliding_titles_are_disambiguated_on_save() {
    let services = memory_services(MemoryStore::new());
    let mut app = open(&services).await;

    add_prompt(&mut app, &services, "A!", "first").await;
    add_prompt(&mut app, &services, "A?", "second").await;
    press(&mut app, &services, KeyCode::Char('s')).await;

    let ids: Vec<String> = services
        .store
        .snapshot()
        .unwrap()
        .prompts
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec!["a", "a_2"]);
}

#[tokio::test]
async fn test_fetch_models_and_pick_one() {
    let services = memory_services(MemoryStore::with_record(ConfigRecord {
        api_key: "gsk_key".to_string(),
        ..ConfigRecord::default()
    }));
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Char('f')).await;

    assert!(!app.fetching);
    assert_eq!(app.state, AppState::PickingModel);
    assert_eq!(
        app.available_models,
        vec![
            ModelOption {
                id: "m1".to_string(),
                display_name: "m1".to_string()
            },
            ModelOption {
                id: "m2".to_string(),
                display_name: "m2".to_string()
            },
        ]
    );
    assert_eq!(*services.catalog.seen_keys.lock().unwrap(), vec!["gsk_key"]);

    press(&mut app, &services, KeyCode::Down).await;
    press(&mut app, &services, KeyCode::Enter).await;

    assert_eq!(app.state, AppState::Browsing);
    assert_eq!(app.llm_model, "m2");
    assert!(app.dirty);
    assert_eq!(services.store.write_count(), 0);
}

#[tokio::test]
async fn test_fetch_failure_leaves_picker_untouched() {
    let services = Services {
        store: MemoryStore::new(),
        catalog: StubCatalog::failing(),
    };
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Char('f')).await;

    assert!(!app.fetching);
    assert!(app.available_models.is_empty());
    assert_eq!(app.state, AppState::Browsing);
    assert_eq!(
        app.status.as_ref().unwrap().text,
        "Failed to fetch models: HTTP 503: Service Unavailable"
    );
}

#[tokio::test]
async fn test_quit_with_unsaved_changes_needs_confirmation() {
    let services = memory_services(MemoryStore::new());
    let mut app = open(&services).await;
    add_prompt(&mut app, &services, "Keep", "").await;

    press(&mut app, &services, KeyCode::Char('q')).await;
    assert!(!app.should_quit);
    assert!(app.quit_armed);

    press(&mut app, &services, KeyCode::Char('q')).await;
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_quit_when_clean_is_immediate() {
    let services = memory_services(MemoryStore::new());
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Char('q')).await;

    assert!(app.should_quit);
}

#[tokio::test]
async fn test_editing_title_keeps_creation_id() {
    let services = memory_services(MemoryStore::with_record(ConfigRecord {
        prompts: vec![prompt("summarize", "Summarize", "")],
        ..ConfigRecord::default()
    }));
    let mut app = open(&services).await;

    press(&mut app, &services, KeyCode::Down).await;
    press(&mut app, &services, KeyCode::Down).await;
    press(&mut app, &services, KeyCode::Enter).await;
    type_text(&mut app, &services, " Briefly").await;
    press(&mut app, &services, KeyCode::Enter).await;
    press(&mut app, &services, KeyCode::Char('s')).await;

    let saved = services.store.snapshot().unwrap();
    assert_eq!(saved.prompts, vec![prompt("summarize", "Summarize Briefly", "")]);
}
