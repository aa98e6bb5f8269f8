/// Truncate to `max` chars, ending with an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Split `text` around a char cursor for rendering
pub fn split_at_cursor(text: &str, cursor: usize) -> (&str, &str) {
    let offset = text
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text.split_at(offset)
}

/// First line to show so that lines `start..=end` fit in `visible` rows.
/// A block taller than the view is shown from its start.
pub fn scroll_offset(start: usize, end: usize, visible: usize) -> u16 {
    if visible == 0 || end < visible {
        return 0;
    }
    let offset = (end + 1 - visible).min(start);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
