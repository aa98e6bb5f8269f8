use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState, Field};
use crate::domain::types::mask_secret;
use crate::prompt_list::PromptRow;

use super::util::{scroll_offset, split_at_cursor, truncate};

const LABEL_WIDTH: usize = 10;
const PREVIEW_LINES: usize = 2;

/// Render the options form: fixed fields, then one entry per prompt row
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let editing = app.editing_field();
    // Line range of the selected entry, kept in view below.
    let mut focus = (0, 0);

    lines.push(section_title("SETTINGS"));
    lines.push(Line::from(""));

    let api_key = if editing == Some(Field::ApiKey) {
        None
    } else if app.api_key.is_empty() {
        Some(Span::styled("(not set)", Style::default().fg(Color::DarkGray)))
    } else {
        Some(Span::styled(
            mask_secret(&app.api_key),
            Style::default().fg(Color::White),
        ))
    };
    if app.selected == 0 {
        focus = (lines.len(), lines.len());
    }
    lines.push(field_line(app, 0, Field::ApiKey, &app.api_key, api_key));

    let model = if editing == Some(Field::Model) {
        None
    } else {
        Some(Span::styled(
            app.llm_model.clone(),
            Style::default().fg(Color::Yellow),
        ))
    };
    if app.selected == 1 {
        focus = (lines.len(), lines.len());
    }
    lines.push(field_line(app, 1, Field::Model, &app.llm_model, model));

    lines.push(Line::from(""));
    lines.push(section_title(&format!("PROMPTS ({})", app.prompts.len())));
    lines.push(Line::from(""));

    if app.prompts.is_empty() && app.state != AppState::NamingPrompt {
        lines.push(Line::from(Span::styled(
            "  No prompts yet. Press a to add one.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, row) in app.prompts.rows().iter().enumerate() {
        let start = lines.len();
        lines.extend(prompt_lines(app, i + 2, row));
        if editing == Some(Field::PromptText(row.handle())) {
            let (before, _) = split_at_cursor(&row.text, app.cursor_pos);
            let cursor_line = start + 1 + before.matches('\n').count();
            focus = (cursor_line, cursor_line);
        } else if i + 2 == app.selected {
            focus = (start, lines.len().saturating_sub(1));
        }
    }

    if app.state == AppState::NamingPrompt {
        focus = (lines.len(), lines.len());
        let (before, after) = split_at_cursor(&app.draft_title, app.cursor_pos);
        lines.push(Line::from(vec![
            Span::styled("▶ ", Style::default().fg(Color::Cyan)),
            Span::styled("New prompt: ", Style::default().fg(Color::Green)),
            Span::styled(before.to_string(), Style::default().fg(Color::White)),
            cursor_span(),
            Span::styled(after.to_string(), Style::default().fg(Color::White)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Options ");

    let visible = area.height.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset(focus.0, focus.1, visible), 0));
    frame.render_widget(paragraph, area);
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {} ──", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn marker(app: &App, index: usize) -> Span<'static> {
    if index == app.selected {
        Span::styled("▶ ", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("  ", Style::default())
    }
}

fn cursor_span() -> Span<'static> {
    Span::styled("▏", Style::default().fg(Color::Yellow))
}

/// One fixed field. `display` is None while the field is being edited.
fn field_line<'a>(
    app: &App,
    index: usize,
    field: Field,
    raw: &'a str,
    display: Option<Span<'a>>,
) -> Line<'a> {
    let label_style = if index == app.selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        marker(app, index),
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
    ];

    match display {
        Some(span) => spans.push(span),
        None => {
            let (before, after) = split_at_cursor(raw, app.cursor_pos);
            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(cursor_span());
            spans.push(Span::styled(after, Style::default().fg(Color::White)));
        }
    }

    Line::from(spans)
}

fn prompt_lines<'a>(app: &App, index: usize, row: &'a PromptRow) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let handle = row.handle();
    let editing = app.editing_field();
    let is_selected = index == app.selected;

    let title_style = if is_selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut title_spans = vec![marker(app, index)];
    if editing == Some(Field::PromptTitle(handle)) {
        let (before, after) = split_at_cursor(&row.title, app.cursor_pos);
        title_spans.push(Span::styled(before, title_style));
        title_spans.push(cursor_span());
        title_spans.push(Span::styled(after, title_style));
    } else if row.title.is_empty() {
        title_spans.push(Span::styled("(untitled)", Style::default().fg(Color::DarkGray)));
    } else {
        title_spans.push(Span::styled(truncate(&row.title, 48), title_style));
    }
    if !row.id().is_empty() {
        title_spans.push(Span::styled(
            format!("  [{}]", row.id()),
            Style::default().fg(Color::Blue),
        ));
    }
    lines.push(Line::from(title_spans));

    if editing == Some(Field::PromptText(handle)) {
        let (before, after) = split_at_cursor(&row.text, app.cursor_pos);
        let with_cursor = format!("{}▏{}", before, after);
        for text_line in with_cursor.split('\n') {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(text_line.to_string(), Style::default().fg(Color::Yellow)),
            ]));
        }
    } else {
        for text_line in row.text.lines().take(PREVIEW_LINES) {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(truncate(text_line, 72), Style::default().fg(Color::DarkGray)),
            ]));
        }
        if row.text.lines().count() > PREVIEW_LINES {
            lines.push(Line::from(Span::styled(
                "    ... (press t to edit full text)",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}
