//! Stand-in provider used when no remote model can be configured.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::{GenerationConfig, LlmProvider, ProviderError};

/// Fails every request without touching the network.
///
/// Lets the advisor run with no API key: every call degrades to the retry
/// chain and then to the local fallback table.
#[derive(Debug, Clone)]
pub struct DisabledProvider {
    reason: String,
}

impl DisabledProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[async_trait]
impl LlmProvider for DisabledProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<JsonValue, ProviderError> {
        Err(ProviderError::NotConfigured(self.reason.clone()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
