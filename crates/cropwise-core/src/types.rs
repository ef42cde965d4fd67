//! Input and output types shared across Cropwise.
//!
//! `PredictionParams` keeps its categorical fields as plain strings so that
//! values outside the known sets can still flow through prompts and the
//! fallback table. The typed [`Region`], [`Season`] and [`SoilType`] enums are
//! derived from those strings wherever a lookup needs them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Humidity assumed when the caller does not supply one.
pub const DEFAULT_HUMIDITY: f64 = 60.0;

/// Ordered list of crop names.
pub type CropList = Vec<String>;

/// Growing conditions supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionParams {
    /// Region name (e.g., "Vidarbha")
    pub region: String,

    /// Season name: "Kharif", "Rabi" or "Summer"
    pub season: String,

    /// Soil type name (e.g., "Black Soil")
    pub soil_type: String,

    /// Temperature in °C
    pub temperature: f64,

    /// Soil moisture in percent
    pub moisture: f64,

    /// Soil pH
    pub soil_ph: f64,

    /// Relative humidity in percent
    #[serde(default)]
    pub humidity: Option<f64>,

    /// Crop being explained (explanations only)
    #[serde(default)]
    pub crop_name: String,
}

impl PredictionParams {
    /// Create params with no humidity and no crop name.
    pub fn new(
        region: impl Into<String>,
        season: impl Into<String>,
        soil_type: impl Into<String>,
        temperature: f64,
        moisture: f64,
        soil_ph: f64,
    ) -> Self {
        Self {
            region: region.into(),
            season: season.into(),
            soil_type: soil_type.into(),
            temperature,
            moisture,
            soil_ph,
            humidity: None,
            crop_name: String::new(),
        }
    }

    /// Set the humidity.
    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Set the crop name used by explanations.
    pub fn with_crop_name(mut self, crop_name: impl Into<String>) -> Self {
        self.crop_name = crop_name.into();
        self
    }

    /// Humidity, or [`DEFAULT_HUMIDITY`] when absent.
    pub fn humidity_or_default(&self) -> f64 {
        self.humidity.unwrap_or(DEFAULT_HUMIDITY)
    }
}

/// Seed-size model output that an explanation justifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResults {
    /// Categorical seed size (e.g., "Medium")
    pub seed_size: String,

    /// Sowing depth in cm
    pub sowing_depth: f64,

    /// Plant spacing in cm
    pub spacing: f64,
}

/// Agro-climatic regions of Maharashtra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Vidarbha,
    Marathwada,
    WesternMaharashtra,
    Konkan,
    NorthMaharashtra,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Vidarbha,
        Region::Marathwada,
        Region::WesternMaharashtra,
        Region::Konkan,
        Region::NorthMaharashtra,
    ];

    /// Display name as used by callers.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Vidarbha => "Vidarbha",
            Region::Marathwada => "Marathwada",
            Region::WesternMaharashtra => "Western Maharashtra",
            Region::Konkan => "Konkan",
            Region::NorthMaharashtra => "North Maharashtra",
        }
    }

    /// Parse a region name, ignoring case and whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| same_name(r.name(), name))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Indian cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Summer];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Summer => "Summer",
        }
    }

    /// Parse a season name, ignoring case and whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| same_name(s.name(), name))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Soil types found across Maharashtra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Black,
    Red,
    Laterite,
    MediumBlack,
    Alluvial,
    Sandy,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Black,
        SoilType::Red,
        SoilType::Laterite,
        SoilType::MediumBlack,
        SoilType::Alluvial,
        SoilType::Sandy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SoilType::Black => "Black Soil",
            SoilType::Red => "Red Soil",
            SoilType::Laterite => "Laterite Soil",
            SoilType::MediumBlack => "Medium Black Soil",
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::Sandy => "Sandy Soil",
        }
    }

    /// Parse a soil name, ignoring case and whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| same_name(s.name(), name))
    }

    /// Best-effort match for free-form soil names.
    ///
    /// Tries [`SoilType::from_name`] first, then looks for a keyword.
    /// "medium" is checked before "black" so "medium black clay" is not
    /// taken for heavy black soil.
    pub fn infer(name: &str) -> Option<Self> {
        if let Some(soil) = Self::from_name(name) {
            return Some(soil);
        }

        let lower = name.to_lowercase();
        const KEYWORDS: [(&str, SoilType); 6] = [
            ("medium", SoilType::MediumBlack),
            ("black", SoilType::Black),
            ("red", SoilType::Red),
            ("laterite", SoilType::Laterite),
            ("alluvial", SoilType::Alluvial),
            ("sandy", SoilType::Sandy),
        ];

        KEYWORDS
            .into_iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, soil)| soil)
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remove all whitespace from a name.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn same_name(canonical: &str, candidate: &str) -> bool {
    strip_whitespace(canonical).eq_ignore_ascii_case(&strip_whitespace(candidate))
}
