use serde::Deserialize;

use super::error::FetchError;
use super::types::ModelOption;

/// Groq's OpenAI-compatible model listing.
pub const GROQ_MODELS_URL: &str = "https://api.groq.com/openai/v1/models";

/// Source of available model identifiers.
#[allow(async_fn_in_trait)]
pub trait ModelCatalog {
    async fn fetch_models(&self, api_key: &str) -> Result<Vec<ModelOption>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Option<Vec<ModelEntry>>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

/// HTTP catalog speaking the `GET /models` shape: `{"data":[{"id":...}]}`.
#[derive(Debug, Clone)]
pub struct GroqCatalog {
    client: reqwest::Client,
    endpoint: String,
}

impl GroqCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for GroqCatalog {
    fn default() -> Self {
        Self::new(GROQ_MODELS_URL)
    }
}

impl ModelCatalog for GroqCatalog {
    async fn fetch_models(&self, api_key: &str) -> Result<Vec<ModelOption>, FetchError> {
        let mut request = self.client.get(&self.endpoint);
        if !api_key.is_empty() {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: ModelsResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(parsed
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|m| ModelOption::from_id(m.id))
            .collect())
    }
}
