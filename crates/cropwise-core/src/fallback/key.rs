//! Lookup keys for the fallback table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{strip_whitespace, PredictionParams, Region, Season, SoilType};

/// Separator between key components.
pub const KEY_DELIMITER: &str = "_";

/// Coarse temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    /// Below 20°C
    Cool,
    /// 20°C to 30°C inclusive
    Normal,
    /// Above 30°C
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature < 20.0 {
            TemperatureBand::Cool
        } else if temperature > 30.0 {
            TemperatureBand::Hot
        } else {
            TemperatureBand::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cool => "Cool",
            TemperatureBand::Normal => "Normal",
            TemperatureBand::Hot => "Hot",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse soil moisture range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoistureBand {
    /// Below 40%
    Dry,
    /// 40% to 70% inclusive
    Medium,
    /// Above 70%
    Wet,
}

impl MoistureBand {
    pub fn from_percent(moisture: f64) -> Self {
        if moisture < 40.0 {
            MoistureBand::Dry
        } else if moisture > 70.0 {
            MoistureBand::Wet
        } else {
            MoistureBand::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureBand::Dry => "Dry",
            MoistureBand::Medium => "Medium",
            MoistureBand::Wet => "Wet",
        }
    }
}

impl fmt::Display for MoistureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized inputs to a fallback lookup.
///
/// Known soils, regions and seasons are rewritten to their canonical
/// spelling, so `"kharif"` and `"Kharif"` hit the same entries in every
/// tier. Unknown names are kept with whitespace removed. Derived fresh for
/// every call. `variant` is the already-chosen index into
/// the season-only alternatives, which keeps table resolution a pure function
/// of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackQuery {
    pub soil: String,
    pub region: String,
    pub season: String,
    pub temperature: TemperatureBand,
    pub moisture: MoistureBand,
    pub variant: usize,
}

impl FallbackQuery {
    /// Build a query from caller params and a season variant index.
    pub fn new(params: &PredictionParams, variant: usize) -> Self {
        Self {
            soil: key_part(&params.soil_type, SoilType::from_name, SoilType::name),
            region: key_part(&params.region, Region::from_name, Region::name),
            season: key_part(&params.season, Season::from_name, Season::name),
            temperature: TemperatureBand::from_celsius(params.temperature),
            moisture: MoistureBand::from_percent(params.moisture),
            variant,
        }
    }

    /// soil + region + season + temperature band + moisture band
    pub fn detailed_key(&self) -> String {
        [
            self.soil.as_str(),
            self.region.as_str(),
            self.season.as_str(),
            self.temperature.as_str(),
            self.moisture.as_str(),
        ]
        .join(KEY_DELIMITER)
    }

    /// soil + region + season
    pub fn basic_key(&self) -> String {
        [self.soil.as_str(), self.region.as_str(), self.season.as_str()].join(KEY_DELIMITER)
    }

    /// soil + season
    pub fn soil_season_key(&self) -> String {
        [self.soil.as_str(), self.season.as_str()].join(KEY_DELIMITER)
    }

    /// soil alone
    pub fn soil_key(&self) -> String {
        self.soil.clone()
    }
}

fn key_part<T>(raw: &str, parse: fn(&str) -> Option<T>, name: fn(&T) -> &'static str) -> String {
    match parse(raw) {
        Some(known) => strip_whitespace(name(&known)),
        None => strip_whitespace(raw),
    }
}
