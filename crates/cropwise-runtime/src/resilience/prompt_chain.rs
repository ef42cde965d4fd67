//! Sequential multi-prompt retry.

use cropwise_core::{crop_list_from_response, retry_candidates, CropList, PredictionParams};

use crate::providers::{GenerationConfig, LlmProvider};
use crate::AdvisorError;

/// Sampling temperature for retry prompts.
pub const RETRY_TEMPERATURE: f32 = 0.9;

/// A successful chain run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSuccess {
    /// The parsed, non-empty crop list
    pub crops: CropList,

    /// Index of the candidate that produced it
    pub candidate: usize,
}

/// Candidate prompts, tried in order until one yields a non-empty list.
#[derive(Debug, Clone, Default)]
pub struct PromptChain {
    candidates: Vec<String>,
}

impl PromptChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate.
    pub fn add(mut self, prompt: impl Into<String>) -> Self {
        self.candidates.push(prompt.into());
        self
    }

    /// The standard four retry prompts for `params`.
    pub fn for_params(params: &PredictionParams) -> Self {
        Self {
            candidates: retry_candidates(params),
        }
    }

    /// Candidates in order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Try each candidate in order.
    ///
    /// Provider failures, unparseable text and empty arrays all move on to
    /// the next candidate. The first non-empty list is returned and no later
    /// candidate is sent.
    ///
    /// # Errors
    /// [`AdvisorError::Exhausted`] when every candidate fails.
    pub async fn run(
        &self,
        provider: &dyn LlmProvider,
        config: &GenerationConfig,
    ) -> Result<ChainSuccess, AdvisorError> {
        for (index, prompt) in self.candidates.iter().enumerate() {
            let response = match provider.generate(prompt, config).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(candidate = index, error = %e, "Retry prompt failed");
                    continue;
                }
            };

            match crop_list_from_response(&response) {
                Ok(crops) if !crops.is_empty() => {
                    tracing::info!(candidate = index, count = crops.len(), "Retry prompt succeeded");
                    return Ok(ChainSuccess {
                        crops,
                        candidate: index,
                    });
                }
                Ok(_) => {
                    tracing::warn!(candidate = index, "Retry prompt returned an empty list");
                }
                Err(e) => {
                    tracing::warn!(candidate = index, error = %e, "Retry response unusable");
                }
            }
        }

        Err(AdvisorError::Exhausted {
            attempts: self.candidates.len(),
        })
    }
}
