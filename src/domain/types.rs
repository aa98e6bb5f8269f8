use serde::{Deserialize, Serialize};

/// Model used when nothing has been stored yet.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Environment variable that seeds the default API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// The persisted options record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub api_key: String,
    pub llm_model: String,
    pub prompts: Vec<PromptRecord>,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            llm_model: DEFAULT_MODEL.to_string(),
            prompts: Vec::new(),
        }
    }
}

impl ConfigRecord {
    /// Defaults with the API key taken from `GROQ_API_KEY` when it is set.
    pub fn defaults_from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Copy of the record that is safe to print.
    pub fn masked(&self) -> Self {
        Self {
            api_key: mask_secret(&self.api_key),
            ..self.clone()
        }
    }
}

/// A user-defined prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// One entry of the model catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOption {
    pub id: String,
    pub display_name: String,
}

impl ModelOption {
    /// Upstream identifiers are shown as-is.
    pub fn from_id(id: String) -> Self {
        Self {
            display_name: id.clone(),
            id,
        }
    }
}

/// Hide all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 8 {
        return "•".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "•".repeat(count - 4), tail)
}
