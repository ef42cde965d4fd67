//! # cropwise-core
//!
//! Deterministic building blocks for Cropwise crop advice.
//!
//! This crate never touches the network. It provides:
//! - The input model ([`PredictionParams`], [`PredictionResults`])
//! - Descriptive tables for soils, regions and seasons
//! - Prompt builders for recommendations and explanations
//! - Parsers for `generateContent` responses
//! - The tiered fallback table used when the remote model is unavailable
//!
//! ## Key Guarantees
//!
//! 1. **Total**: every fallback lookup returns a non-empty crop list
//! 2. **Deterministic**: given a fixed [`VariantSelector`], identical params
//!    resolve identically
//! 3. **Lenient**: unknown soils, regions and seasons degrade to generic
//!    descriptions and broader tiers, never to errors
//!
//! ## Example
//!
//! ```rust
//! use cropwise_core::{resolve_fallback, PredictionParams, TierKind, VariantSelector};
//!
//! let params = PredictionParams::new("Vidarbha", "Kharif", "Black Soil", 35.0, 20.0, 7.8);
//! let resolution = resolve_fallback(&params, VariantSelector::Fixed(0));
//!
//! assert_eq!(resolution.tier, TierKind::Detailed);
//! assert_eq!(resolution.crops[0], "Moth Bean");
//! ```

pub mod descriptions;
pub mod fallback;
pub mod prompt;
pub mod response;
pub mod types;

// Re-export main types at crate root
pub use fallback::{
    resolve_fallback, FallbackQuery, FallbackTable, MoistureBand, Resolution, TemperatureBand,
    Tier, TierKind, VariantSelector, DEFAULT_CROPS,
};
pub use prompt::{
    explanation_prompt, fallback_explanation, recommendation_prompt, retry_candidates,
    GENERIC_CROPS, STAPLE_CROPS,
};
pub use response::{
    crop_list_from_response, extract_crop_list, extract_explanation, is_generic_list,
    ResponseError,
};
pub use types::{
    CropList, PredictionParams, PredictionResults, Region, Season, SoilType, DEFAULT_HUMIDITY,
};
