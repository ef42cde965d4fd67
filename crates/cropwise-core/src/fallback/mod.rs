//! Deterministic crop fallback when remote recommendations are unavailable.
//!
//! Resolution walks an ordered list of tiers, most specific first:
//!
//! | Tier | Key |
//! |------|-----|
//! | Detailed | soil + region + season + temperature band + moisture band |
//! | Basic | soil + region + season |
//! | SoilSeason | soil + season |
//! | Soil | soil |
//! | Season | season, one of three variants |
//! | Default | always matches |
//!
//! The first tier with an entry wins. Each tier can be built on its own, so a
//! table with fewer tiers (or custom data) is easy to assemble for tests.
//! Whatever the tiers, [`FallbackTable::resolve`] never returns an empty list:
//! if nothing matches, [`DEFAULT_CROPS`] is used.

mod data;
mod key;

pub use data::{DEFAULT_CROPS, SEASON_VARIANT_COUNT};
pub use key::{FallbackQuery, MoistureBand, TemperatureBand, KEY_DELIMITER};

use chrono::Utc;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::types::{CropList, PredictionParams, Season};

lazy_static! {
    static ref STANDARD_TABLE: FallbackTable = FallbackTable::new_standard();
}

/// Which tier produced a fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Detailed,
    Basic,
    SoilSeason,
    Soil,
    Season,
    Default,
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TierKind::Detailed => "detailed",
            TierKind::Basic => "basic",
            TierKind::SoilSeason => "soil+season",
            TierKind::Soil => "soil",
            TierKind::Season => "season",
            TierKind::Default => "default",
        };
        f.write_str(name)
    }
}

/// How the season-only tier picks among its variants.
///
/// `Clock` reproduces the "vary across calls" behavior by reading the
/// wall clock once per query; `Fixed` makes resolution reproducible.
///
/// Serialized as `"clock"` or `{fixed: N}`; a bare integer also reads as
/// `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "VariantRepr", into = "VariantRepr")]
pub enum VariantSelector {
    #[default]
    Clock,
    Fixed(usize),
}

/// Plain-data form of [`VariantSelector`], readable by any serde format
/// without enum tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum VariantRepr {
    Name(String),
    Fixed { fixed: usize },
    Index(usize),
}

impl TryFrom<VariantRepr> for VariantSelector {
    type Error = String;

    fn try_from(repr: VariantRepr) -> Result<Self, Self::Error> {
        match repr {
            VariantRepr::Name(name) if name.trim().eq_ignore_ascii_case("clock") => {
                Ok(VariantSelector::Clock)
            }
            VariantRepr::Name(name) => Err(format!(
                "unknown variant selector '{name}', expected \"clock\" or {{fixed: N}}"
            )),
            VariantRepr::Fixed { fixed } | VariantRepr::Index(fixed) => {
                Ok(VariantSelector::Fixed(fixed))
            }
        }
    }
}

impl From<VariantSelector> for VariantRepr {
    fn from(selector: VariantSelector) -> Self {
        match selector {
            VariantSelector::Clock => VariantRepr::Name("clock".to_string()),
            VariantSelector::Fixed(fixed) => VariantRepr::Fixed { fixed },
        }
    }
}

impl VariantSelector {
    /// Pick an index in `0..count`.
    pub fn select(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        match self {
            VariantSelector::Fixed(index) => index % count,
            VariantSelector::Clock => Utc::now().timestamp().rem_euclid(count as i64) as usize,
        }
    }
}

/// One level of the fallback lookup.
pub trait Tier: Send + Sync {
    /// Which tier this is.
    fn kind(&self) -> TierKind;

    /// Crops for the query, or `None` to defer to the next tier.
    fn lookup(&self, query: &FallbackQuery) -> Option<&'static [&'static str]>;
}

/// A tier backed by a static table keyed by a string derived from the query.
pub struct KeyedTier {
    kind: TierKind,
    key: fn(&FallbackQuery) -> String,
    entries: HashMap<&'static str, &'static [&'static str]>,
}

impl KeyedTier {
    pub fn new(
        kind: TierKind,
        key: fn(&FallbackQuery) -> String,
        entries: &[(&'static str, &'static [&'static str])],
    ) -> Self {
        Self {
            kind,
            key,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn detailed() -> Self {
        Self::new(TierKind::Detailed, FallbackQuery::detailed_key, data::DETAILED)
    }

    pub fn basic() -> Self {
        Self::new(TierKind::Basic, FallbackQuery::basic_key, data::BASIC)
    }

    pub fn soil_season() -> Self {
        Self::new(TierKind::SoilSeason, FallbackQuery::soil_season_key, data::SOIL_SEASON)
    }

    pub fn soil() -> Self {
        Self::new(TierKind::Soil, FallbackQuery::soil_key, data::SOIL)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tier for KeyedTier {
    fn kind(&self) -> TierKind {
        self.kind
    }

    fn lookup(&self, query: &FallbackQuery) -> Option<&'static [&'static str]> {
        self.entries.get((self.key)(query).as_str()).copied()
    }
}

/// Season-only alternatives, chosen by the query's variant index.
#[derive(Debug, Default)]
pub struct SeasonTier;

impl Tier for SeasonTier {
    fn kind(&self) -> TierKind {
        TierKind::Season
    }

    fn lookup(&self, query: &FallbackQuery) -> Option<&'static [&'static str]> {
        let season = Season::from_name(&query.season)?;
        let variants = data::season_variants(season);
        Some(variants[query.variant % SEASON_VARIANT_COUNT])
    }
}

/// Unconditional base case.
#[derive(Debug, Default)]
pub struct DefaultTier;

impl Tier for DefaultTier {
    fn kind(&self) -> TierKind {
        TierKind::Default
    }

    fn lookup(&self, _query: &FallbackQuery) -> Option<&'static [&'static str]> {
        Some(DEFAULT_CROPS)
    }
}

/// Outcome of a fallback lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub crops: CropList,
    pub tier: TierKind,
}

/// Ordered tiers evaluated first-match-wins.
pub struct FallbackTable {
    tiers: Vec<Box<dyn Tier>>,
}

impl FallbackTable {
    /// Build a table from explicit tiers, in evaluation order.
    pub fn with_tiers(tiers: Vec<Box<dyn Tier>>) -> Self {
        Self { tiers }
    }

    /// The shared six-tier table.
    pub fn standard() -> &'static FallbackTable {
        &STANDARD_TABLE
    }

    /// Build a fresh six-tier table.
    pub fn new_standard() -> Self {
        Self::with_tiers(vec![
            Box::new(KeyedTier::detailed()),
            Box::new(KeyedTier::basic()),
            Box::new(KeyedTier::soil_season()),
            Box::new(KeyedTier::soil()),
            Box::new(SeasonTier),
            Box::new(DefaultTier),
        ])
    }

    /// Tier kinds in evaluation order.
    pub fn tier_kinds(&self) -> Vec<TierKind> {
        self.tiers.iter().map(|t| t.kind()).collect()
    }

    /// Resolve a query to a non-empty crop list.
    pub fn resolve(&self, query: &FallbackQuery) -> Resolution {
        for tier in &self.tiers {
            match tier.lookup(query) {
                Some(crops) if !crops.is_empty() => {
                    tracing::debug!(tier = %tier.kind(), "Fallback tier matched");
                    return Resolution {
                        crops: to_crop_list(crops),
                        tier: tier.kind(),
                    };
                }
                _ => continue,
            }
        }

        tracing::debug!("No fallback tier matched, using default crops");
        Resolution {
            crops: to_crop_list(DEFAULT_CROPS),
            tier: TierKind::Default,
        }
    }
}

impl fmt::Debug for FallbackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackTable")
            .field("tiers", &self.tier_kinds())
            .finish()
    }
}

/// Resolve fallback crops for `params` against the standard table.
pub fn resolve_fallback(params: &PredictionParams, selector: VariantSelector) -> Resolution {
    let query = FallbackQuery::new(params, selector.select(SEASON_VARIANT_COUNT));
    FallbackTable::standard().resolve(&query)
}

fn to_crop_list(crops: &[&str]) -> CropList {
    crops.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(soil: &str, region: &str, season: &str, temperature: f64, moisture: f64) -> PredictionParams {
        PredictionParams::new(region, season, soil, temperature, moisture, 7.0)
    }

    fn resolve(p: &PredictionParams) -> Resolution {
        resolve_fallback(p, VariantSelector::Fixed(0))
    }

    #[test]
    fn test_standard_tier_order() {
        assert_eq!(
            FallbackTable::standard().tier_kinds(),
            vec![
                TierKind::Detailed,
                TierKind::Basic,
                TierKind::SoilSeason,
                TierKind::Soil,
                TierKind::Season,
                TierKind::Default,
            ]
        );
    }

    #[test]
    fn test_detailed_tier_hot_dry_vidarbha() {
        let resolution = resolve(&params("Black Soil", "Vidarbha", "Kharif", 35.0, 20.0));

        assert_eq!(resolution.tier, TierKind::Detailed);
        assert_eq!(
            resolution.crops,
            vec!["Moth Bean", "Cluster Bean", "Horse Gram", "Castor", "Sesame", "Pigeon Pea"]
        );
    }

    #[test]
    fn test_detailed_tier_normal_medium_vidarbha() {
        let resolution = resolve(&params("Black Soil", "Vidarbha", "Kharif", 25.0, 50.0));

        assert_eq!(resolution.tier, TierKind::Detailed);
        assert_eq!(
            resolution.crops,
            vec!["Cotton", "Soybean", "Pigeon Pea", "Green Gram", "Sorghum"]
        );
    }

    #[test]
    fn test_basic_tier_when_bands_miss() {
        // No detailed Marathwada entries exist
        let resolution = resolve(&params("Black Soil", "Marathwada", "Rabi", 15.0, 90.0));

        assert_eq!(resolution.tier, TierKind::Basic);
        assert_eq!(resolution.crops[0], "Sorghum");
    }

    #[test]
    fn test_soil_season_tier_when_region_misses() {
        // Cool + Wet has no Vidarbha Kharif entry, and no basic key either
        let resolution = resolve(&params("Black Soil", "Vidarbha", "Kharif", 15.0, 90.0));

        assert_eq!(resolution.tier, TierKind::SoilSeason);
        assert_eq!(
            resolution.crops,
            vec!["Cotton", "Soybean", "Pigeon Pea", "Green Gram", "Black Gram", "Sesame"]
        );
    }

    #[test]
    fn test_soil_tier_when_season_unknown() {
        let resolution = resolve(&params("Sandy Soil", "Konkan", "Monsoon", 25.0, 50.0));

        assert_eq!(resolution.tier, TierKind::Soil);
        assert_eq!(resolution.crops[0], "Pearl Millet");
    }

    #[test]
    fn test_unknown_soil_falls_to_season_variants() {
        let kharif = data::season_variants(Season::Kharif);

        for index in 0..SEASON_VARIANT_COUNT {
            let resolution = resolve_fallback(
                &params("Unknown Soil", "Vidarbha", "Kharif", 25.0, 50.0),
                VariantSelector::Fixed(index),
            );
            assert_eq!(resolution.tier, TierKind::Season);
            assert_eq!(resolution.crops, to_crop_list(kharif[index]));
        }
    }

    #[test]
    fn test_clock_selector_picks_a_kharif_variant() {
        let kharif: Vec<CropList> = data::season_variants(Season::Kharif)
            .iter()
            .map(|v| to_crop_list(v))
            .collect();

        let resolution = resolve_fallback(
            &params("Unknown Soil", "Vidarbha", "Kharif", 25.0, 50.0),
            VariantSelector::Clock,
        );
        assert_eq!(resolution.tier, TierKind::Season);
        assert!(kharif.contains(&resolution.crops));
    }

    #[test]
    fn test_default_tier_when_everything_misses() {
        let resolution = resolve(&params("Unknown Soil", "Nowhere", "Monsoon", 25.0, 50.0));

        assert_eq!(resolution.tier, TierKind::Default);
        assert_eq!(resolution.crops, to_crop_list(DEFAULT_CROPS));
    }

    #[test]
    fn test_empty_table_still_returns_default() {
        let table = FallbackTable::with_tiers(Vec::new());
        let query = FallbackQuery::new(&params("Black Soil", "Vidarbha", "Kharif", 35.0, 20.0), 0);

        let resolution = table.resolve(&query);
        assert_eq!(resolution.tier, TierKind::Default);
        assert!(!resolution.crops.is_empty());
    }

    #[test]
    fn test_single_tier_in_isolation() {
        let table = FallbackTable::with_tiers(vec![Box::new(KeyedTier::soil())]);
        let query = FallbackQuery::new(&params("Laterite Soil", "Vidarbha", "Kharif", 35.0, 20.0), 0);

        let resolution = table.resolve(&query);
        assert_eq!(resolution.tier, TierKind::Soil);
        assert_eq!(resolution.crops[0], "Rice");
    }

    #[test]
    fn test_custom_keyed_tier() {
        const CUSTOM: &[(&str, &[&str])] = &[("BlackSoil_Kharif", &["Okra"])];
        let tier = KeyedTier::new(TierKind::SoilSeason, FallbackQuery::soil_season_key, CUSTOM);
        assert_eq!(tier.len(), 1);

        let table = FallbackTable::with_tiers(vec![Box::new(tier), Box::new(DefaultTier)]);
        let query = FallbackQuery::new(&params("Black Soil", "Konkan", "Kharif", 25.0, 50.0), 0);
        assert_eq!(table.resolve(&query).crops, vec!["Okra"]);
    }

    #[test]
    fn test_every_known_soil_and_season_resolves_above_default() {
        for soil in crate::types::SoilType::ALL {
            for season in Season::ALL {
                let resolution = resolve(&params(soil.name(), "Nowhere", season.name(), 25.0, 50.0));
                assert_ne!(resolution.tier, TierKind::Default);
                assert_ne!(resolution.tier, TierKind::Season);
            }
        }
    }

    #[test]
    fn test_red_soil_cool_rabi_detailed_entry() {
        let resolution = resolve(&params("Red Soil", "Western Maharashtra", "Rabi", 15.0, 55.0));

        assert_eq!(resolution.tier, TierKind::Detailed);
        assert_eq!(
            resolution.crops,
            vec!["Chickpea", "Safflower", "Fenugreek", "Coriander", "Mustard"]
        );
    }

    #[test]
    fn test_lowercase_season_matches_every_tier() {
        let detailed = resolve(&params("black soil", "vidarbha", "kharif", 35.0, 20.0));
        assert_eq!(detailed.tier, TierKind::Detailed);
        assert_eq!(detailed.crops[0], "Moth Bean");

        // Unknown region skips tiers 1 and 2, soil+season must still match
        let soil_season = resolve(&params("Black Soil", "Elsewhere", "kharif", 25.0, 50.0));
        assert_eq!(soil_season.tier, TierKind::SoilSeason);
        assert_eq!(soil_season.crops[0], "Cotton");
    }

    #[test]
    fn test_variant_selector_serde_forms() {
        let clock: VariantSelector = serde_json::from_str(r#""clock""#).unwrap();
        assert_eq!(clock, VariantSelector::Clock);

        let fixed: VariantSelector = serde_json::from_str(r#"{"fixed": 2}"#).unwrap();
        assert_eq!(fixed, VariantSelector::Fixed(2));

        let bare: VariantSelector = serde_json::from_str("1").unwrap();
        assert_eq!(bare, VariantSelector::Fixed(1));

        assert!(serde_json::from_str::<VariantSelector>(r#""sometimes""#).is_err());

        assert_eq!(
            serde_json::to_value(VariantSelector::Fixed(2)).unwrap(),
            serde_json::json!({ "fixed": 2 })
        );
        assert_eq!(
            serde_json::to_value(VariantSelector::Clock).unwrap(),
            serde_json::json!("clock")
        );
    }

    #[test]
    fn test_fixed_selector_wraps() {
        assert_eq!(VariantSelector::Fixed(4).select(3), 1);
        assert_eq!(VariantSelector::Fixed(2).select(0), 0);
        assert!(VariantSelector::Clock.select(3) < 3);
    }

    proptest! {
        #[test]
        fn prop_resolution_is_never_empty(
            soil in prop::sample::select(vec!["Black Soil", "Red Soil", "Laterite Soil",
                "Medium Black Soil", "Alluvial Soil", "Sandy Soil", "Unknown Soil", ""]),
            region in prop::sample::select(vec!["Vidarbha", "Marathwada", "Western Maharashtra",
                "Konkan", "North Maharashtra", "Elsewhere"]),
            season in prop::sample::select(vec!["Kharif", "Rabi", "Summer", "Monsoon"]),
            temperature in -10.0f64..55.0,
            moisture in 0.0f64..100.0,
            variant in 0usize..10,
        ) {
            let p = params(soil, region, season, temperature, moisture);
            let resolution = resolve_fallback(&p, VariantSelector::Fixed(variant));
            prop_assert!(!resolution.crops.is_empty());
        }

        #[test]
        fn prop_resolution_is_repeatable(
            soil in prop::sample::select(vec!["Black Soil", "Red Soil", "Alluvial Soil", "Unknown Soil"]),
            region in prop::sample::select(vec!["Vidarbha", "Konkan", "Western Maharashtra"]),
            season in prop::sample::select(vec!["Kharif", "Rabi", "Summer"]),
            temperature in 0.0f64..50.0,
            moisture in 0.0f64..100.0,
        ) {
            let p = params(soil, region, season, temperature, moisture);
            let first = resolve(&p);
            let second = resolve(&p);
            prop_assert_eq!(first, second);
        }
    }
}
