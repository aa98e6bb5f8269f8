use crossterm::event::{KeyCode, KeyModifiers};

use crate::domain::types::{ConfigRecord, ModelOption};

#[derive(Debug)]
pub enum Action {
    Input { code: KeyCode, modifiers: KeyModifiers },
    Tick,
    Restored(Result<ConfigRecord, String>),
    Saved(Result<(), String>),
    ModelsFetched(Result<Vec<ModelOption>, String>),
}
