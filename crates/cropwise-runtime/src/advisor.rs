//! Public operations: crop recommendations and seed explanations.
//!
//! # Execution Flow (recommendations)
//! 1. Primary prompt → parse → reject empty or generic lists
//! 2. On any failure: retry chain of four alternative prompts
//! 3. On exhaustion: tiered fallback table
//!
//! Explanations try a single prompt and fall back to a local template.
//! Neither operation ever returns an error to the caller.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use cropwise_core::fallback::{FallbackQuery, SEASON_VARIANT_COUNT};
use cropwise_core::{
    crop_list_from_response, explanation_prompt, extract_explanation, fallback_explanation,
    is_generic_list, recommendation_prompt, CropList, FallbackTable, PredictionParams,
    PredictionResults, TierKind,
};

use crate::config::RuntimeConfig;
use crate::providers::LlmProvider;
use crate::resilience::PromptChain;
use crate::AdvisorError;

/// Where a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Origin {
    /// The primary prompt
    Live,

    /// A retry prompt, by index
    Retry { candidate: usize },

    /// The local fallback table
    Fallback { tier: TierKind },
}

/// Crop list with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crops: CropList,
    pub origin: Origin,
}

impl Recommendation {
    /// Whether the list came from the remote model.
    pub fn is_live(&self) -> bool {
        !matches!(self.origin, Origin::Fallback { .. })
    }
}

/// Crop advice backed by a remote model with local fallback.
///
/// Holds only immutable state, so one advisor can serve concurrent calls.
pub struct CropAdvisor {
    provider: Arc<dyn LlmProvider>,
    config: RuntimeConfig,
    fallback: Arc<FallbackTable>,
}

impl CropAdvisor {
    /// Create an advisor using the standard fallback table.
    pub fn new(provider: Arc<dyn LlmProvider>, config: RuntimeConfig) -> Self {
        Self {
            provider,
            config,
            fallback: Arc::new(FallbackTable::new_standard()),
        }
    }

    /// Create an advisor talking to Gemini, configured from `config.provider`.
    ///
    /// A missing API key is not an error: the advisor is built around a
    /// [`DisabledProvider`](crate::providers::DisabledProvider) and every answer comes from local data.
    ///
    /// # Errors
    /// Provider settings that are present but invalid, such as a malformed
    /// `base_url`.
    #[cfg(feature = "gemini")]
    pub fn from_config(config: RuntimeConfig) -> Result<Self, crate::providers::ProviderError> {
        use crate::providers::{DisabledProvider, GeminiProvider, ProviderError};

        let provider: Arc<dyn LlmProvider> =
            match GeminiProvider::from_config(&config.provider) {
                Ok(provider) => Arc::new(provider),
                Err(ProviderError::MissingCredential(reason)) => {
                    tracing::warn!(%reason, "No API key configured, using local crop data only");
                    Arc::new(DisabledProvider::new(reason))
                }
                Err(e) => return Err(e),
            };
        Ok(Self::new(provider, config))
    }

    /// Replace the fallback table.
    pub fn with_fallback_table(mut self, table: FallbackTable) -> Self {
        self.fallback = Arc::new(table);
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Name of the provider behind this advisor.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Whether the provider looks usable. Logs the outcome.
    pub async fn health_check(&self) -> bool {
        let healthy = self.provider.health_check().await;
        if healthy {
            tracing::info!(provider = self.provider.name(), "Provider ready");
        } else {
            tracing::warn!(provider = self.provider.name(), "Provider unavailable, answers will use local data");
        }
        healthy
    }

    /// Farmer-facing explanation of a seed prediction. Never empty.
    pub async fn explain_prediction(
        &self,
        params: &PredictionParams,
        results: &PredictionResults,
    ) -> String {
        match self.try_explain(params, results).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!(provider = self.provider.name(), "Model returned a blank explanation");
                fallback_explanation(params, results)
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), error = %e, "Explanation failed, using template");
                fallback_explanation(params, results)
            }
        }
    }

    /// Recommended crops for the conditions. Never empty.
    pub async fn recommend_crops(&self, params: &PredictionParams) -> CropList {
        self.recommend_crops_traced(params).await.crops
    }

    /// Recommended crops together with their origin.
    pub async fn recommend_crops_traced(&self, params: &PredictionParams) -> Recommendation {
        match self.try_primary(params).await {
            Ok(crops) => {
                tracing::info!(count = crops.len(), "Primary recommendation succeeded");
                return Recommendation {
                    crops,
                    origin: Origin::Live,
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Primary recommendation failed, trying alternative prompts");
            }
        }

        let chain = PromptChain::for_params(params);
        match chain
            .run(self.provider.as_ref(), &self.config.retry_generation())
            .await
        {
            Ok(success) => {
                return Recommendation {
                    crops: self.limit(success.crops),
                    origin: Origin::Retry {
                        candidate: success.candidate,
                    },
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to local crop table");
            }
        }

        let variant = self
            .config
            .recommendations
            .variant
            .select(SEASON_VARIANT_COUNT);
        let resolution = self.fallback.resolve(&FallbackQuery::new(params, variant));

        Recommendation {
            crops: resolution.crops,
            origin: Origin::Fallback {
                tier: resolution.tier,
            },
        }
    }

    async fn try_explain(
        &self,
        params: &PredictionParams,
        results: &PredictionResults,
    ) -> Result<String, AdvisorError> {
        let prompt = explanation_prompt(params, results);
        tracing::debug!(tokens = self.provider.estimate_tokens(&prompt), "Requesting explanation");

        let response = self.provider.generate(&prompt, &self.config.generation).await?;
        Ok(extract_explanation(&response)?)
    }

    async fn try_primary(&self, params: &PredictionParams) -> Result<CropList, AdvisorError> {
        let prompt = recommendation_prompt(params);
        tracing::debug!(tokens = self.provider.estimate_tokens(&prompt), "Requesting recommendations");

        let response = self.provider.generate(&prompt, &self.config.generation).await?;
        let crops = self.limit(crop_list_from_response(&response)?);

        if crops.is_empty() {
            return Err(AdvisorError::EmptyList);
        }
        if self.config.recommendations.reject_generic && is_generic_list(&crops) {
            return Err(AdvisorError::GenericList);
        }
        Ok(crops)
    }

    fn limit(&self, mut crops: CropList) -> CropList {
        crops.truncate(self.config.recommendations.max_crops.max(1));
        crops
    }
}
