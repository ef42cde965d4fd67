//! Scripted provider shared by runtime tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value as JsonValue;
use std::collections::VecDeque;

use crate::providers::{GenerationConfig, LlmProvider, ProviderError};

/// Replays queued results in order, then fails every further call.
pub(crate) struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<JsonValue, ProviderError>>>,
    calls: Mutex<Vec<(String, f32)>>,
}

impl ScriptedProvider {
    pub(crate) fn new(responses: Vec<Result<JsonValue, ProviderError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    /// A `generateContent` body whose first part is `text`.
    pub(crate) fn text_response(text: &str) -> JsonValue {
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(p, _)| p.clone()).collect()
    }

    pub(crate) fn temperatures(&self) -> Vec<f32> {
        self.calls.lock().iter().map(|(_, t)| *t).collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<JsonValue, ProviderError> {
        self.calls
            .lock()
            .push((prompt.to_string(), config.temperature));

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::HttpError("connection refused".to_string())))
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
