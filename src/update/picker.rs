use crossterm::event::KeyCode;

use crate::app::{App, AppState};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.state = AppState::Browsing;
            Vec::new()
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.model_down();
            Vec::new()
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.model_up();
            Vec::new()
        }
        KeyCode::Enter => {
            if let Some(id) = app.highlighted_model().map(|m| m.id.clone()) {
                if id != app.llm_model {
                    app.llm_model = id;
                    app.dirty = true;
                }
            }
            app.state = AppState::Browsing;
            Vec::new()
        }
        _ => Vec::new(),
    }
}
