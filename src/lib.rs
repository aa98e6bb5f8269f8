//! gopt - terminal options editor for the Groq assistant.
//!
//! Keeps the API key, the selected model and a list of saved prompts in a
//! JSON store, and can look up the models the Groq catalog offers.

pub mod action;
pub mod app;
pub mod command;
pub mod config;
pub mod domain;
pub mod prompt_list;
pub mod ui;
pub mod update;
