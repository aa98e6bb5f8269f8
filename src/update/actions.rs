use crate::app::{App, AppState, ERROR_TTL, SAVE_OK_TTL, SUCCESS_TTL, StatusKind};
use crate::command::Command;
use crate::domain::types::{ConfigRecord, ModelOption};

pub fn handle_restored(app: &mut App, result: Result<ConfigRecord, String>) -> Vec<Command> {
    match result {
        Ok(record) => {
            app.apply_record(&record);
        }
        Err(_) => {
            app.flash(
                StatusKind::Error,
                "Error restoring options. Please try reloading.",
                ERROR_TTL,
            );
        }
    }
    app.state = AppState::Browsing;
    Vec::new()
}

pub fn handle_saved(app: &mut App, result: Result<(), String>) -> Vec<Command> {
    match result {
        Ok(()) => {
            app.dirty = false;
            app.quit_armed = false;
            app.flash(StatusKind::Success, "Options saved.", SAVE_OK_TTL);
        }
        Err(_) => {
            app.flash(StatusKind::Error, "Error saving options.", ERROR_TTL);
        }
    }
    Vec::new()
}

pub fn handle_models_fetched(
    app: &mut App,
    result: Result<Vec<ModelOption>, String>,
) -> Vec<Command> {
    app.fetching = false;

    match result {
        Ok(models) => {
            app.flash(
                StatusKind::Success,
                format!("Found {} models", models.len()),
                SUCCESS_TTL,
            );
            app.model_selected = models
                .iter()
                .position(|m| m.id == app.llm_model)
                .unwrap_or(0);
            app.available_models = models;
            if !app.available_models.is_empty() && app.state == AppState::Browsing {
                app.state = AppState::PickingModel;
            }
        }
        Err(err) => {
            app.flash(
                StatusKind::Error,
                format!("Failed to fetch models: {}", err),
                ERROR_TTL,
            );
        }
    }
    Vec::new()
}
