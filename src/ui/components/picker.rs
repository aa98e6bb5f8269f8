use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

use super::util::truncate;

/// Render the available-models overlay
pub fn render_model_picker(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(
            "SELECT MODEL",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} available", app.available_models.len()),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));

    // Keep the highlighted entry on screen.
    let visible = popup_area.height.saturating_sub(4) as usize;
    let skip = app
        .model_selected
        .saturating_sub(visible.saturating_sub(1));

    for (i, model) in app
        .available_models
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible.max(1))
    {
        let is_selected = i == app.model_selected;
        let is_current = model.id == app.llm_model;

        let marker = if is_selected { "▶ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(truncate(&model.display_name, 50), style),
        ];
        if is_current {
            spans.push(Span::styled(" (current)", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Available Models ");

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
