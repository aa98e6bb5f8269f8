use tracing::warn;

use crate::app::{App, AppState, Selection};
use crate::command::Command;

pub fn restore_all(app: &mut App) -> Vec<Command> {
    app.state = AppState::Loading;
    vec![Command::Restore {
        defaults: app.defaults.clone(),
    }]
}

pub fn save_all(app: &App) -> Vec<Command> {
    vec![Command::Save {
        record: app.to_record(),
    }]
}

pub fn fetch_models(app: &mut App) -> Vec<Command> {
    app.fetching = true;
    vec![Command::FetchModels {
        api_key: app.api_key.clone(),
    }]
}

/// Remove the selected prompt row and persist what is left.
pub fn remove_selected_prompt(app: &mut App) -> Vec<Command> {
    let Some(Selection::Prompt(handle)) = app.selection() else {
        warn!(selected = app.selected, "delete requested without a prompt row selected");
        return Vec::new();
    };

    if app.prompts.remove_row(handle) {
        app.dirty = true;
    } else {
        warn!(?handle, "prompt row already detached");
    }
    app.clamp_selection();
    save_all(app)
}
