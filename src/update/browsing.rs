use crossterm::event::{KeyCode, KeyModifiers};
use tracing::warn;

use crate::app::{App, AppState, ERROR_TTL, Field, Selection, StatusKind};
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if !matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
        app.quit_armed = false;
    }

    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            request_quit(app);
            Vec::new()
        }
        (KeyCode::Char('s'), _) => helpers::save_all(app),
        (KeyCode::Char('f'), KeyModifiers::NONE) => helpers::fetch_models(app),
        (KeyCode::Char('r'), KeyModifiers::NONE) => helpers::restore_all(app),
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            app.select_down();
            Vec::new()
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            app.select_up();
            Vec::new()
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            app.start_naming();
            Vec::new()
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => {
            helpers::remove_selected_prompt(app)
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            if app.available_models.is_empty() {
                app.flash(StatusKind::Error, "No models fetched yet. Press f.", ERROR_TTL);
            } else {
                app.state = AppState::PickingModel;
            }
            Vec::new()
        }
        (KeyCode::Enter, _) => {
            let field = match app.selection() {
                Some(Selection::ApiKey) => Field::ApiKey,
                Some(Selection::Model) => Field::Model,
                Some(Selection::Prompt(handle)) => Field::PromptTitle(handle),
                None => {
                    warn!(selected = app.selected, "nothing to edit at selection");
                    return Vec::new();
                }
            };
            app.start_editing(field);
            Vec::new()
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            match app.selection() {
                Some(Selection::Prompt(handle)) => {
                    app.start_editing(Field::PromptText(handle));
                }
                _ => warn!(selected = app.selected, "text edit requested without a prompt row"),
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn request_quit(app: &mut App) {
    if app.dirty && !app.quit_armed {
        app.quit_armed = true;
        app.flash(
            StatusKind::Error,
            "Unsaved changes. Press q again to quit.",
            ERROR_TTL,
        );
        return;
    }
    app.should_quit = true;
}
