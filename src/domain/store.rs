use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde::Deserialize;

use super::error::StorageError;
use super::types::{ConfigRecord, PromptRecord};

/// Key-value persistence for the options record.
#[allow(async_fn_in_trait)]
pub trait ConfigStore {
    /// Read the stored record, taking any absent field from `defaults`.
    async fn get(&self, defaults: &ConfigRecord) -> Result<ConfigRecord, StorageError>;

    /// Replace the stored record as a whole.
    async fn set(&self, record: &ConfigRecord) -> Result<(), StorageError>;
}

/// What may actually be on disk: any key can be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    api_key: Option<String>,
    llm_model: Option<String>,
    prompts: Option<Vec<PromptRecord>>,
}

impl StoredRecord {
    fn merge(self, defaults: &ConfigRecord) -> ConfigRecord {
        ConfigRecord {
            api_key: self.api_key.unwrap_or_else(|| defaults.api_key.clone()),
            llm_model: self.llm_model.unwrap_or_else(|| defaults.llm_model.clone()),
            prompts: self.prompts.unwrap_or_else(|| defaults.prompts.clone()),
        }
    }
}

/// JSON document on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigStore for FileStore {
    async fn get(&self, defaults: &ConfigRecord) -> Result<ConfigRecord, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(defaults.clone()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(defaults.clone());
        }

        let stored: StoredRecord =
            serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        Ok(stored.merge(defaults))
    }

    async fn set(&self, record: &ConfigRecord) -> Result<(), StorageError> {
        let mut json = serde_json::to_string_pretty(record).map_err(StorageError::Encode)?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        // Write next to the target and rename so readers never see half a record.
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| self.write_error(e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.write_error(e))?;

        Ok(())
    }
}

/// In-process store with switchable failure
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<ConfigRecord>>,
    failing: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ConfigRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
            ..Self::default()
        }
    }

    /// Make every following call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The record as last written, if any.
    pub fn snapshot(&self) -> Option<ConfigRecord> {
        self.record.lock().ok().and_then(|guard| guard.clone())
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("store is failing".to_string()));
        }
        Ok(())
    }
}

impl ConfigStore for MemoryStore {
    async fn get(&self, defaults: &ConfigRecord) -> Result<ConfigRecord, StorageError> {
        self.check()?;
        let guard = self
            .record
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        Ok(guard.clone().unwrap_or_else(|| defaults.clone()))
    }

    async fn set(&self, record: &ConfigRecord) -> Result<(), StorageError> {
        self.check()?;
        let mut guard = self
            .record
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        *guard = Some(record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
