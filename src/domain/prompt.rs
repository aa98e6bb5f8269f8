use std::collections::HashSet;

/// Derive a prompt id from its title.
///
/// Lowercases the title, collapses every run of non-alphanumeric characters
/// into a single `_` and trims separators from both ends.
pub fn normalize(title: &str) -> String {
    let mut id = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !id.is_empty() {
                id.push('_');
            }
            pending_separator = false;
            id.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    id
}

/// Return `base` if no existing id uses it, otherwise the first free `base_N` (N >= 2).
///
/// An empty base that collides falls back to `prompt_N`.
pub fn unique_id<'a, I>(base: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = existing.into_iter().collect();
    if !taken.contains(base) {
        return base.to_string();
    }

    let stem = if base.is_empty() { "prompt" } else { base };
    let mut n = 2usize;
    loop {
        let candidate = format!("{stem}_{n}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}
