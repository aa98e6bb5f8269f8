use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState, Field};

/// Render the keybindings bar at the bottom
pub fn render_keybindings(frame: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = match &app.state {
        AppState::Loading => vec![("q", "Quit")],
        AppState::Browsing => {
            let mut keys = vec![
                ("j/k", "Move"),
                ("Enter", "Edit"),
                ("t", "Text"),
                ("a", "Add prompt"),
                ("d", "Delete"),
                ("s", "Save"),
                ("f", if app.fetching { "Fetching..." } else { "Fetch models" }),
            ];
            if !app.available_models.is_empty() {
                keys.push(("m", "Models"));
            }
            keys.push(("r", "Reload"));
            keys.push(("q", "Quit"));
            keys
        }
        AppState::Editing(field) => {
            let mut keys = vec![("Editing", field.label()), ("Type", "Edit text")];
            if matches!(field, Field::PromptTitle(_) | Field::PromptText(_)) {
                keys.push(("Tab", "Title/Text"));
            }
            keys.push(("Ctrl+S", "Save"));
            keys.push(("Esc", "Done"));
            keys
        }
        AppState::NamingPrompt => vec![("Type", "Title"), ("Enter", "Add"), ("Esc", "Cancel")],
        AppState::PickingModel => vec![
            ("j/↓", "Down"),
            ("k/↑", "Up"),
            ("Enter", "Use model"),
            ("Esc", "Close"),
        ],
    };

    // Build the line with key highlights
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
