//! Runtime configuration.
//!
//! Every section has defaults, so an empty document is a valid config:
//!
//! ```yaml
//! provider:
//!   model: gemini-pro
//!   # api_key falls back to GEMINI_API_KEY (or the var named by api_key_env)
//! generation:
//!   temperature: 0.9
//!   max_output_tokens: 1024
//!   timeout: 30s
//! recommendations:
//!   max_crops: 7
//!   reject_generic: true
//!   variant: clock        # or {fixed: 1}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use cropwise_core::VariantSelector;

use crate::providers::GenerationConfig;
use crate::resilience::RETRY_TEMPERATURE;

/// Configuration validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    Temperature(f32),

    #[error("max_output_tokens must be greater than zero")]
    MaxOutputTokens,

    #[error("max_crops must be greater than zero")]
    MaxCrops,
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Provider settings, handed to the provider's `from_config`
    pub provider: JsonValue,

    /// Sampling settings for the primary prompts
    pub generation: GenerationConfig,

    /// Recommendation post-processing and fallback settings
    pub recommendations: RecommendationConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            provider: JsonValue::Object(Default::default()),
            generation: GenerationConfig::default(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for temperature in [
            self.generation.temperature,
            self.recommendations.retry_temperature,
        ] {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::Temperature(temperature));
            }
        }
        if self.generation.max_output_tokens == 0 {
            return Err(ConfigError::MaxOutputTokens);
        }
        if self.recommendations.max_crops == 0 {
            return Err(ConfigError::MaxCrops);
        }
        Ok(())
    }

    /// Generation settings used for retry prompts.
    pub fn retry_generation(&self) -> GenerationConfig {
        self.generation
            .with_temperature(self.recommendations.retry_temperature)
    }
}

/// How live crop lists are post-processed and how fallback picks variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Live lists are truncated to this many crops
    pub max_crops: usize,

    /// Reject a primary answer made mostly of staple crops
    pub reject_generic: bool,

    /// Sampling temperature for the retry chain
    pub retry_temperature: f32,

    /// Season-only fallback variant selection
    pub variant: VariantSelector,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_crops: 7,
            reject_generic: true,
            retry_temperature: RETRY_TEMPERATURE,
            variant: VariantSelector::Clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_empty_document_is_default() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.generation, GenerationConfig::default());
        assert_eq!(config.recommendations, RecommendationConfig::default());
        assert!(config.provider.is_object());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config: RuntimeConfig = serde_json::from_value(serde_json::json!({
            "provider": { "model": "gemini-1.5-flash" },
            "generation": { "timeout": "30s" },
            "recommendations": { "max_crops": 5, "variant": { "fixed": 2 } }
        }))
        .unwrap();

        assert_eq!(config.provider["model"], "gemini-1.5-flash");
        assert_eq!(config.generation.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.generation.temperature, 0.9);
        assert_eq!(config.recommendations.max_crops, 5);
        assert!(config.recommendations.reject_generic);
        assert_eq!(config.recommendations.variant, VariantSelector::Fixed(2));
    }

    #[test]
    fn test_clock_variant_spelling() {
        let config: RecommendationConfig =
            serde_json::from_str(r#"{"variant": "clock"}"#).unwrap();
        assert_eq!(config.variant, VariantSelector::Clock);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = RuntimeConfig::default();
        config.generation.temperature = 3.5;
        assert_eq!(config.validate(), Err(ConfigError::Temperature(3.5)));

        let mut config = RuntimeConfig::default();
        config.recommendations.max_crops = 0;
        assert_eq!(config.validate(), Err(ConfigError::MaxCrops));

        let mut config = RuntimeConfig::default();
        config.generation.max_output_tokens = 0;
        assert_eq!(config.validate(), Err(ConfigError::MaxOutputTokens));
    }

    #[test]
    fn test_retry_generation_uses_retry_temperature() {
        let mut config = RuntimeConfig::default();
        config.generation.temperature = 0.2;

        let retry = config.retry_generation();
        assert_eq!(retry.temperature, RETRY_TEMPERATURE);
        assert_eq!(retry.max_output_tokens, config.generation.max_output_tokens);
    }
}
