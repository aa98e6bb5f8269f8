use crate::domain::prompt::{normalize, unique_id};
use crate::domain::types::PromptRecord;

/// Stable reference to a rendered prompt row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowHandle(u64);

/// One editable prompt row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRow {
    handle: RowHandle,
    id: String,
    pub title: String,
    pub text: String,
}

impl PromptRow {
    pub fn handle(&self) -> RowHandle {
        self.handle
    }

    /// Fixed when the row is created; editing the title does not change it.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The ordered prompt rows shown on screen
#[derive(Debug, Default)]
pub struct PromptList {
    rows: Vec<PromptRow>,
    next_handle: u64,
}

impl PromptList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with one row per record, in stored order.
    pub fn restore(&mut self, records: &[PromptRecord]) {
        self.rows.clear();
        for record in records {
            self.add_row(&record.title, &record.text, &record.id);
        }
    }

    /// Append a row. An empty `id` is derived from `title`; a taken id gets a suffix.
    pub fn add_row(&mut self, title: &str, text: &str, id: &str) -> RowHandle {
        let base = if id.is_empty() {
            normalize(title)
        } else {
            id.to_string()
        };
        let id = unique_id(&base, self.rows.iter().map(|r| r.id.as_str()));

        let handle = RowHandle(self.next_handle);
        self.next_handle += 1;

        self.rows.push(PromptRow {
            handle,
            id,
            title: title.to_string(),
            text: text.to_string(),
        });
        handle
    }

    /// Detach a row. Returns false if it was already gone.
    pub fn remove_row(&mut self, handle: RowHandle) -> bool {
        match self.position(handle) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// Read every row back into records, in display order.
    pub fn collect(&self) -> Vec<PromptRecord> {
        self.rows
            .iter()
            .map(|row| PromptRecord {
                id: row.id.clone(),
                title: row.title.clone(),
                text: row.text.clone(),
            })
            .collect()
    }

    pub fn get(&self, handle: RowHandle) -> Option<&PromptRow> {
        self.rows.iter().find(|r| r.handle == handle)
    }

    pub fn get_mut(&mut self, handle: RowHandle) -> Option<&mut PromptRow> {
        self.rows.iter_mut().find(|r| r.handle == handle)
    }

    pub fn position(&self, handle: RowHandle) -> Option<usize> {
        self.rows.iter().position(|r| r.handle == handle)
    }

    pub fn handle_at(&self, index: usize) -> Option<RowHandle> {
        self.rows.get(index).map(|r| r.handle)
    }

    pub fn rows(&self) -> &[PromptRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
