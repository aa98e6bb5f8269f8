mod actions;
mod browsing;
mod editing;
mod helpers;
mod loading;
mod naming;
mod picker;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;
use crate::app::{App, AppState};
use crate::command::Command;

/// Commands to run when the screen opens
pub fn init(app: &mut App) -> Vec<Command> {
    helpers::restore_all(app)
}

pub fn update(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::Input { code, modifiers } => {
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return Vec::new();
            }
            match &app.state {
                AppState::Loading => loading::handle_input(app, code),
                AppState::Browsing => browsing::handle_input(app, code, modifiers),
                AppState::Editing(_) => editing::handle_input(app, code, modifiers),
                AppState::NamingPrompt => naming::handle_input(app, code),
                AppState::PickingModel => picker::handle_input(app, code),
            }
        }
        Action::Tick => {
            app.expire_status(Instant::now());
            Vec::new()
        }
        Action::Restored(result) => actions::handle_restored(app, result),
        Action::Saved(result) => actions::handle_saved(app, result),
        Action::ModelsFetched(result) => actions::handle_models_fetched(app, result),
    }
}
