use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Field};
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    let Some(field) = app.editing_field() else {
        return Vec::new();
    };

    match code {
        KeyCode::Esc => {
            app.stop_editing();
            Vec::new()
        }
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.stop_editing();
            helpers::save_all(app)
        }
        KeyCode::Enter => {
            if field.is_multiline() {
                app.insert_char('\n');
            } else {
                app.stop_editing();
            }
            Vec::new()
        }
        KeyCode::Tab | KeyCode::BackTab => {
            // Swap between the title and text of the same prompt.
            let other = match field {
                Field::PromptTitle(handle) => Some(Field::PromptText(handle)),
                Field::PromptText(handle) => Some(Field::PromptTitle(handle)),
                Field::ApiKey | Field::Model => None,
            };
            if let Some(other) = other {
                app.start_editing(other);
            }
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
        KeyCode::Home => {
            app.cursor_home();
            Vec::new()
        }
        KeyCode::End => {
            app.cursor_end();
            Vec::new()
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}
