use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppState};

use super::components::form::render_form;
use super::components::header::render_header;
use super::components::keybindings::render_keybindings;
use super::components::loading::render_loading;
use super::components::picker::render_model_picker;
use super::components::status::render_status;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(5),    // Form
            Constraint::Length(1), // Status line
            Constraint::Length(2), // Keybindings bar
        ])
        .split(size);

    render_header(frame, app, chunks[0]);

    match &app.state {
        AppState::Loading => render_loading(frame, chunks[1], "Loading options..."),
        AppState::Browsing | AppState::Editing(_) | AppState::NamingPrompt => {
            render_form(frame, app, chunks[1]);
        }
        AppState::PickingModel => {
            render_form(frame, app, chunks[1]);
            render_model_picker(frame, app, chunks[1]);
        }
    }

    render_status(frame, app, chunks[2]);
    render_keybindings(frame, app, chunks[3]);
}
