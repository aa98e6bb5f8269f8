//! Resolved runtime settings.
//!
//! GOPT_HOME resolution order:
//! 1. GOPT_HOME environment variable (if set)
//! 2. ~/.config/gopt (default)

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::catalog::GROQ_MODELS_URL;

pub const HOME_ENV: &str = "GOPT_HOME";
pub const STORE_FILE: &str = "options.json";
pub const LOG_FILE: &str = "gopt.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub catalog_url: String,
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Fill in everything the command line left unset.
    pub fn resolve(
        store_path: Option<PathBuf>,
        catalog_url: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let needs_home = store_path.is_none() || log_file.is_none();
        let home = if needs_home { Some(gopt_home()?) } else { None };

        let store_path = match store_path {
            Some(path) => path,
            None => home.clone().unwrap_or_default().join(STORE_FILE),
        };
        let log_file = match log_file {
            Some(path) => path,
            None => home.unwrap_or_default().join(LOG_FILE),
        };

        Ok(Self {
            store_path,
            catalog_url: catalog_url.unwrap_or_else(|| GROQ_MODELS_URL.to_string()),
            log_file,
        })
    }
}

/// Returns the gopt home directory.
pub fn gopt_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|h| h.join(".config").join("gopt"))
        .context("Could not determine home directory; set GOPT_HOME")
}
