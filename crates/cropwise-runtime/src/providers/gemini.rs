//! Google Gemini `generateContent` provider.
//!
//! Wire format (request):
//!
//! ```json
//! {
//!   "contents": [{ "parts": [{ "text": "..." }] }],
//!   "generationConfig": { "temperature": 0.9, "maxOutputTokens": 1024 }
//! }
//! ```
//!
//! The key is sent as the `key` query parameter. Transport errors are
//! stripped of their URL before being reported so the key never reaches a
//! log line.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;

use super::{
    secrets::{ApiCredential, CredentialSource},
    GenerationConfig, LlmProvider, ProviderError,
};

/// Environment variable name for the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini text-generation provider.
pub struct GeminiProvider {
    credential: ApiCredential,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiProvider {
    /// Create a provider with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_credential(ApiCredential::new(
            api_key,
            CredentialSource::Programmatic,
            "Gemini API key",
        ))
    }

    /// Create from JSON configuration with environment fallback.
    ///
    /// ```json
    /// {
    ///   "api_key": "...",          // optional, falls back to the environment
    ///   "api_key_env": "MY_KEY",   // optional, defaults to GEMINI_API_KEY
    ///   "base_url": "https://...", // optional
    ///   "model": "gemini-pro"      // optional
    /// }
    /// ```
    ///
    /// # Errors
    /// [`ProviderError::MissingCredential`] when neither source has a key,
    /// [`ProviderError::NotConfigured`] for a malformed `base_url`.
    pub fn from_config(config: &JsonValue) -> Result<Self, ProviderError> {
        let env_var = config["api_key_env"].as_str().unwrap_or(GEMINI_API_KEY_ENV);
        let credential =
            ApiCredential::from_config_or_env(config, "api_key", env_var, "Gemini API key")?;

        let mut provider = Self::with_credential(credential);

        if let Some(url) = config["base_url"].as_str() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ProviderError::NotConfigured(
                    "base_url must start with http:// or https://".to_string(),
                ));
            }
            provider.base_url = url.to_string();
        }

        if let Some(model) = config["model"].as_str() {
            provider.model = model.to_string();
        }

        Ok(provider)
    }

    fn with_credential(credential: ApiCredential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Set custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full `generateContent` URL, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateRequest<'a> {
    fn single(prompt: &'a str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: WireGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<JsonValue, ProviderError> {
        let body = GenerateRequest::single(prompt, config);

        // SECURITY: Only expose the credential here, at the point of use
        let mut request = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.credential.expose())])
            .json(&body);

        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(config.timeout.unwrap_or_default())
            } else {
                ProviderError::HttpError(e.without_url().to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());

            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.without_url().to_string()))
    }

    async fn health_check(&self) -> bool {
        !self.credential.is_empty()
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
