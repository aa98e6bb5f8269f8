use crossterm::event::KeyCode;
use tracing::debug;

use crate::app::{App, AppState, Field};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Esc => {
            app.draft_title.clear();
            app.state = AppState::Browsing;
            Vec::new()
        }
        KeyCode::Enter => {
            let title = std::mem::take(&mut app.draft_title);
            let handle = app.prompts.add_row(&title, "", "");
            if let Some(row) = app.prompts.get(handle) {
                debug!(id = row.id(), "added prompt row");
            }
            app.dirty = true;
            app.select_prompt(handle);
            app.start_editing(Field::PromptText(handle));
            Vec::new()
        }
        KeyCode::Backspace => {
            app.delete_char();
            Vec::new()
        }
        KeyCode::Left => {
            app.cursor_left();
            Vec::new()
        }
        KeyCode::Right => {
            app.cursor_right();
            Vec::new()
        }
        KeyCode::Char(c) => {
            app.insert_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}
