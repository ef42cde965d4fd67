//! Descriptive lookup tables used to ground prompts.
//!
//! Unknown names never fail; they resolve to a generic phrase.

use crate::types::{Region, Season, SoilType};

/// Phrase used for soil types that cannot be matched.
pub const GENERIC_SOIL_DESCRIPTION: &str =
    "specific soil properties that influence crop selection";

/// Phrase used for unknown regions.
pub const GENERIC_REGION_DESCRIPTION: &str = "specific regional climate and growing conditions";

/// Phrase used for unknown seasons.
pub const GENERIC_SEASON_DESCRIPTION: &str =
    "specific growing season with its characteristic climate";

impl SoilType {
    /// Agronomic description of the soil.
    pub fn description(&self) -> &'static str {
        match self {
            SoilType::Black => "high clay content with excellent water retention, rich in carbonates, calcium, magnesium, and potash, alkaline with pH 7.5-8.5",
            SoilType::Red => "porous with good drainage, poor in nitrogen and organic matter, rich in potash, slightly acidic with pH 6.0-6.8",
            SoilType::Laterite => "acidic with pH 5.0-6.0, poor in nitrogen and calcium, rich in iron and aluminum oxides, requires fertilization",
            SoilType::MediumBlack => "moderate clay content with balanced drainage and water retention, pH 7.0-8.0, more versatile than heavy black soil",
            SoilType::Alluvial => "highly fertile with potash, phosphoric acid, and lime, variable texture, pH 6.5-7.5, excellent for intensive agriculture",
            SoilType::Sandy => "large particles with excellent drainage but poor water and nutrient retention, acidic with pH 5.5-6.5, warms quickly",
        }
    }
}

impl Region {
    /// Climate and cropping description of the region.
    pub fn description(&self) -> &'static str {
        match self {
            Region::Vidarbha => "hot and dry climate, moderate rainfall of 700-900mm annually, known for cotton, soybean, and citrus cultivation",
            Region::Marathwada => "semi-arid climate, low rainfall (600-800mm), prone to drought, traditional jowar and bajra growing area",
            Region::WesternMaharashtra => "moderate rainfall (700-1200mm), diverse climate zones, known for sugarcane, grapes, and onions",
            Region::Konkan => "high rainfall region (2500-3500mm), coastal climate, humid, suitable for rice, coconut, and mango cultivation",
            Region::NorthMaharashtra => "varied climate with moderate rainfall (600-900mm), known for banana, cotton, and wheat cultivation",
        }
    }
}

impl Season {
    /// Calendar window and weather of the season.
    pub fn description(&self) -> &'static str {
        match self {
            Season::Kharif => "monsoon season from June to October, warm and humid with plenty of rainfall",
            Season::Rabi => "winter season from October to March, cooler temperatures with limited rainfall",
            Season::Summer => "hot dry season from March to June, high temperatures with very limited rainfall",
        }
    }
}

/// Describe a soil by name, matching loosely.
pub fn soil_description(name: &str) -> &'static str {
    SoilType::infer(name)
        .map(|soil| soil.description())
        .unwrap_or(GENERIC_SOIL_DESCRIPTION)
}

/// Describe a region by name.
pub fn region_description(name: &str) -> &'static str {
    Region::from_name(name)
        .map(|region| region.description())
        .unwrap_or(GENERIC_REGION_DESCRIPTION)
}

/// Describe a season by name.
pub fn season_description(name: &str) -> &'static str {
    Season::from_name(name)
        .map(|season| season.description())
        .unwrap_or(GENERIC_SEASON_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert!(soil_description("Black Soil").contains("pH 7.5-8.5"));
        assert!(region_description("Konkan").contains("coastal"));
        assert!(season_description("Rabi").contains("winter"));
    }

    #[test]
    fn test_unknown_names_use_generic_phrase() {
        assert_eq!(soil_description("Moon Dust"), GENERIC_SOIL_DESCRIPTION);
        assert_eq!(region_description("Atlantis"), GENERIC_REGION_DESCRIPTION);
        assert_eq!(season_description("Spring"), GENERIC_SEASON_DESCRIPTION);
    }

    #[test]
    fn test_loose_soil_match() {
        assert_eq!(
            soil_description("medium black"),
            SoilType::MediumBlack.description()
        );
    }

    #[test]
    fn test_every_variant_has_description() {
        for soil in SoilType::ALL {
            assert!(!soil.description().is_empty());
        }
        for region in Region::ALL {
            assert!(!region.description().is_empty());
        }
        for season in Season::ALL {
            assert!(!season.description().is_empty());
        }
    }
}
