use std::time::{Duration, Instant};

use crate::domain::types::{ConfigRecord, ModelOption};
use crate::prompt_list::{PromptList, RowHandle};

/// How long "Options saved." stays visible
pub const SAVE_OK_TTL: Duration = Duration::from_millis(750);
/// How long other success messages stay visible
pub const SUCCESS_TTL: Duration = Duration::from_millis(2000);
/// How long error messages stay visible
pub const ERROR_TTL: Duration = Duration::from_millis(3000);

/// Number of fixed fields above the prompt rows
const FIXED_FIELDS: usize = 2;

/// Application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the stored options
    Loading,
    /// Moving between fields
    Browsing,
    /// Typing into a field
    Editing(Field),
    /// Typing the title of a new prompt
    NamingPrompt,
    /// Available-models overlay is open
    PickingModel,
}

/// An editable text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ApiKey,
    Model,
    PromptTitle(RowHandle),
    PromptText(RowHandle),
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::ApiKey => "API key",
            Field::Model => "Model",
            Field::PromptTitle(_) => "Prompt title",
            Field::PromptText(_) => "Prompt text",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::PromptText(_))
    }
}

/// What the selection cursor points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    ApiKey,
    Model,
    Prompt(RowHandle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Transient feedback shown in the status line
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

/// The main application
pub struct App {
    /// Current state
    pub state: AppState,
    /// Values used for fields the store does not have
    pub defaults: ConfigRecord,
    /// API key field
    pub api_key: String,
    /// Model field
    pub llm_model: String,
    /// Prompt rows
    pub prompts: PromptList,
    /// Selected row: 0 = API key, 1 = model, 2.. = prompts
    pub selected: usize,
    /// Cursor position (in chars) in the field being edited
    pub cursor_pos: usize,
    /// Title typed for a prompt that is about to be added
    pub draft_title: String,
    /// Last fetched catalog, empty until a fetch succeeds
    pub available_models: Vec<ModelOption>,
    /// Highlighted entry in the models overlay
    pub model_selected: usize,
    /// A catalog request is in flight
    pub fetching: bool,
    /// Status message
    pub status: Option<StatusMessage>,
    /// Fields changed since the last save or restore
    pub dirty: bool,
    /// Quit was pressed once with unsaved changes
    pub quit_armed: bool,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(defaults: ConfigRecord) -> Self {
        Self {
            state: AppState::Loading,
            defaults,
            api_key: String::new(),
            llm_model: String::new(),
            prompts: PromptList::new(),
            selected: 0,
            cursor_pos: 0,
            draft_title: String::new(),
            available_models: Vec::new(),
            model_selected: 0,
            fetching: false,
            status: None,
            dirty: false,
            quit_armed: false,
            should_quit: false,
        }
    }

    /// Build the record the fields currently describe
    pub fn to_record(&self) -> ConfigRecord {
        ConfigRecord {
            api_key: self.api_key.clone(),
            llm_model: self.llm_model.clone(),
            prompts: self.prompts.collect(),
        }
    }

    /// Fill the fields from a stored record
    pub fn apply_record(&mut self, record: &ConfigRecord) {
        self.api_key = record.api_key.clone();
        self.llm_model = record.llm_model.clone();
        self.prompts.restore(&record.prompts);
        self.clamp_selection();
        self.dirty = false;
    }

    /// Show a status message for `ttl`
    pub fn flash(&mut self, kind: StatusKind, text: impl Into<String>, ttl: Duration) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: Instant::now() + ttl,
        });
    }

    /// Drop the status message once it has expired
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }

    /// Total number of selectable rows
    pub fn row_count(&self) -> usize {
        FIXED_FIELDS + self.prompts.len()
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.selected {
            0 => Some(Selection::ApiKey),
            1 => Some(Selection::Model),
            n => self.prompts.handle_at(n - FIXED_FIELDS).map(Selection::Prompt),
        }
    }

    /// Point the selection at a prompt row
    pub fn select_prompt(&mut self, handle: RowHandle) {
        if let Some(index) = self.prompts.position(handle) {
            self.selected = FIXED_FIELDS + index;
        }
    }

    pub fn select_down(&mut self) {
        if self.selected < self.row_count().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }

    /// Text of a field, if it still exists
    pub fn field_text(&self, field: Field) -> Option<&str> {
        match field {
            Field::ApiKey => Some(&self.api_key),
            Field::Model => Some(&self.llm_model),
            Field::PromptTitle(handle) => self.prompts.get(handle).map(|r| r.title.as_str()),
            Field::PromptText(handle) => self.prompts.get(handle).map(|r| r.text.as_str()),
        }
    }

    fn field_text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::ApiKey => Some(&mut self.api_key),
            Field::Model => Some(&mut self.llm_model),
            Field::PromptTitle(handle) => self.prompts.get_mut(handle).map(|r| &mut r.title),
            Field::PromptText(handle) => self.prompts.get_mut(handle).map(|r| &mut r.text),
        }
    }

    /// Field the editor is attached to
    pub fn editing_field(&self) -> Option<Field> {
        match self.state {
            AppState::Editing(field) => Some(field),
            _ => None,
        }
    }

    /// Text the cursor currently operates on
    fn edit_buffer(&mut self) -> Option<&mut String> {
        match self.state {
            AppState::Editing(field) => self.field_text_mut(field),
            AppState::NamingPrompt => Some(&mut self.draft_title),
            _ => None,
        }
    }

    /// Enter edit mode for a field, cursor at the end
    pub fn start_editing(&mut self, field: Field) -> bool {
        let Some(len) = self.field_text(field).map(|t| t.chars().count()) else {
            return false;
        };
        self.cursor_pos = len;
        self.state = AppState::Editing(field);
        true
    }

    /// Exit edit mode
    pub fn stop_editing(&mut self) {
        self.state = AppState::Browsing;
    }

    /// Start typing the title of a new prompt
    pub fn start_naming(&mut self) {
        self.draft_title.clear();
        self.cursor_pos = 0;
        self.state = AppState::NamingPrompt;
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_pos;
        let Some(text) = self.edit_buffer() else {
            return;
        };
        let offset = byte_offset(text, cursor);
        text.insert(offset, c);
        self.cursor_pos += 1;
        self.mark_edited();
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let cursor = self.cursor_pos;
        let Some(text) = self.edit_buffer() else {
            return;
        };
        let offset = byte_offset(text, cursor - 1);
        if offset < text.len() {
            text.remove(offset);
            self.cursor_pos -= 1;
            self.mark_edited();
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let len = self.buffer_len();
        if self.cursor_pos < len {
            self.cursor_pos += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.buffer_len();
    }

    fn buffer_len(&mut self) -> usize {
        self.edit_buffer().map(|t| t.chars().count()).unwrap_or(0)
    }

    fn mark_edited(&mut self) {
        // The draft title is not part of the record until the row exists.
        if self.state != AppState::NamingPrompt {
            self.dirty = true;
        }
    }

    /// Move the models overlay highlight down
    pub fn model_down(&mut self) {
        if self.model_selected < self.available_models.len().saturating_sub(1) {
            self.model_selected += 1;
        }
    }

    /// Move the models overlay highlight up
    pub fn model_up(&mut self) {
        self.model_selected = self.model_selected.saturating_sub(1);
    }

    /// Highlighted entry of the models overlay
    pub fn highlighted_model(&self) -> Option<&ModelOption> {
        self.available_models.get(self.model_selected)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ConfigRecord::default())
    }
}

/// Byte offset of the `index`-th char, or the end of the string
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
