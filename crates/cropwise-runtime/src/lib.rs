//! # cropwise-runtime
//!
//! Remote-model crop advice for Cropwise.
//!
//! This crate talks to a generative language model to produce crop
//! recommendations and seed explanations, and degrades to the deterministic
//! tables in `cropwise-core` whenever the model is unreachable or unhelpful.
//!
//! ## Important
//!
//! Neither public operation returns an error. A network failure, a rejected
//! key or an unparseable answer only changes where the result comes from.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cropwise_runtime::{CropAdvisor, RuntimeConfig};
//! use cropwise_core::PredictionParams;
//!
//! let advisor = CropAdvisor::from_config(RuntimeConfig::default())?;
//! let params = PredictionParams::new("Vidarbha", "Kharif", "Black Soil", 35.0, 20.0, 7.8);
//!
//! let crops = advisor.recommend_crops(&params).await;
//! assert!(!crops.is_empty());
//! ```

pub mod advisor;
pub mod config;
pub mod providers;
pub mod resilience;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

use cropwise_core::ResponseError;
use providers::ProviderError;

/// Errors inside the recommendation pipeline.
///
/// These never escape the public operations; they are logged and trigger
/// the next stage.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Provider call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Unusable response: {0}")]
    Response(#[from] ResponseError),

    #[error("Model returned an empty crop list")]
    EmptyList,

    #[error("Model returned a generic staple-crop list")]
    GenericList,

    #[error("All {attempts} retry prompts failed")]
    Exhausted { attempts: usize },
}

pub use advisor::{CropAdvisor, Origin, Recommendation};
pub use config::{ConfigError, RecommendationConfig, RuntimeConfig};
pub use providers::{GenerationConfig, LlmProvider};
pub use resilience::{ChainSuccess, PromptChain, RETRY_TEMPERATURE};

#[cfg(feature = "gemini")]
pub use providers::GeminiProvider;
