use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, StatusKind};

/// Render the transient status line
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Success => Color::Green,
                StatusKind::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(
                    status.text.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None if app.fetching => Line::from(vec![Span::styled(
            " ⏳ Fetching models...",
            Style::default().fg(Color::Yellow),
        )]),
        None => Line::from(""),
    };

    frame.render_widget(Paragraph::new(line), area);
}
