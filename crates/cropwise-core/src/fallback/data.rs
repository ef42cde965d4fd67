//! Curated crop lists behind each fallback tier.

use crate::types::Season;

pub(super) type Entry = (&'static str, &'static [&'static str]);

/// soil_region_season_temperature_moisture
pub(super) const DETAILED: &[Entry] = &[
    // Black Soil
    ("BlackSoil_Vidarbha_Kharif_Hot_Dry", &["Moth Bean", "Cluster Bean", "Horse Gram", "Castor", "Sesame", "Pigeon Pea"]),
    ("BlackSoil_Vidarbha_Kharif_Hot_Medium", &["Cotton", "Pigeon Pea", "Soybean", "Black Gram", "Sesame"]),
    ("BlackSoil_Vidarbha_Kharif_Normal_Medium", &["Cotton", "Soybean", "Pigeon Pea", "Green Gram", "Sorghum"]),
    ("BlackSoil_Vidarbha_Rabi_Cool_Medium", &["Wheat", "Chickpea", "Safflower", "Linseed", "Coriander"]),
    ("BlackSoil_Vidarbha_Rabi_Normal_Medium", &["Chickpea", "Safflower", "Sorghum", "Linseed", "Mustard"]),
    ("BlackSoil_Vidarbha_Summer_Hot_Dry", &["Sesame", "Cluster Bean", "Watermelon", "Bottle Gourd", "Snake Gourd"]),
    ("BlackSoil_Vidarbha_Summer_Hot_Medium", &["Mung Bean", "Watermelon", "Muskmelon", "Bottle Gourd", "Bitter Gourd"]),
    // Red Soil
    ("RedSoil_WesternMaharashtra_Kharif_Normal_Medium", &["Pearl Millet", "Pigeon Pea", "Green Gram", "Black Gram", "Cowpea"]),
    ("RedSoil_WesternMaharashtra_Kharif_Hot_Dry", &["Pearl Millet", "Moth Bean", "Cluster Bean", "Sesame", "Horse Gram"]),
    ("RedSoil_WesternMaharashtra_Rabi_Normal_Dry", &["Chickpea", "Coriander", "Fenugreek", "Cumin", "Mustard"]),
    ("RedSoil_WesternMaharashtra_Rabi_Cool_Medium", &["Chickpea", "Safflower", "Fenugreek", "Coriander", "Mustard"]),
    ("RedSoil_WesternMaharashtra_Summer_Hot_Dry", &["Cluster Bean", "Cowpea", "Bottle Gourd", "Sesame", "Guar"]),
    ("RedSoil_WesternMaharashtra_Summer_Hot_Medium", &["Groundnut", "Sesame", "Okra", "Bitter Gourd", "Ridge Gourd"]),
    // Laterite Soil
    ("LateriteSoil_Konkan_Kharif_Normal_Wet", &["Rice", "Finger Millet", "Cowpea", "Horse Gram", "Sesame"]),
    ("LateriteSoil_Konkan_Kharif_Hot_Wet", &["Rice", "Black Gram", "Green Gram", "Cowpea", "Bitter Gourd"]),
    ("LateriteSoil_Konkan_Rabi_Cool_Medium", &["Finger Millet", "Horse Gram", "Sweet Potato", "Colocasia", "Turmeric"]),
    ("LateriteSoil_Konkan_Rabi_Normal_Medium", &["Finger Millet", "Horse Gram", "Vegetables", "Pulses", "Sweet Potato"]),
    ("LateriteSoil_Konkan_Summer_Hot_Medium", &["Okra", "Bitter Gourd", "Ridge Gourd", "Sweet Potato", "Chillies"]),
    ("LateriteSoil_Konkan_Summer_Hot_Wet", &["Vegetables", "Watermelon", "Cucumber", "Gourds", "Chillies"]),
    // Medium Black Soil
    ("MediumBlackSoil_NorthMaharashtra_Kharif_Normal_Medium", &["Cotton", "Soybean", "Pearl Millet", "Sorghum", "Pigeon Pea"]),
    ("MediumBlackSoil_NorthMaharashtra_Kharif_Hot_Dry", &["Pearl Millet", "Moth Bean", "Cluster Bean", "Sesame", "Castor"]),
    ("MediumBlackSoil_NorthMaharashtra_Rabi_Cool_Medium", &["Wheat", "Chickpea", "Sunflower", "Mustard", "Fenugreek"]),
    ("MediumBlackSoil_NorthMaharashtra_Rabi_Normal_Medium", &["Wheat", "Chickpea", "Sunflower", "Mustard", "Vegetables"]),
    // Alluvial Soil
    ("AlluvialSoil_WesternMaharashtra_Kharif_Normal_Wet", &["Rice", "Sugarcane", "Turmeric", "Ginger", "Elephant Foot Yam"]),
    ("AlluvialSoil_WesternMaharashtra_Kharif_Hot_Wet", &["Rice", "Sugarcane", "Taro", "Water Chestnut", "Lotus Root"]),
    ("AlluvialSoil_WesternMaharashtra_Rabi_Cool_Medium", &["Wheat", "Potato", "Onion", "Garlic", "Tomato"]),
    ("AlluvialSoil_WesternMaharashtra_Rabi_Normal_Medium", &["Wheat", "Vegetables", "Potato", "Onion", "Ginger"]),
    ("AlluvialSoil_WesternMaharashtra_Summer_Hot_Medium", &["Muskmelon", "Watermelon", "Cucumber", "Bitter Gourd", "Okra"]),
    ("AlluvialSoil_WesternMaharashtra_Summer_Hot_Wet", &["Sugarcane", "Vegetables", "Melons", "Cucumber", "Pointed Gourd"]),
];

/// soil_region_season
pub(super) const BASIC: &[Entry] = &[
    ("BlackSoil_Marathwada_Kharif", &["Cotton", "Pigeon Pea", "Green Gram", "Black Gram", "Soybean"]),
    ("BlackSoil_Marathwada_Rabi", &["Sorghum", "Wheat", "Chickpea", "Safflower", "Sunflower"]),
    ("BlackSoil_Marathwada_Summer", &["Sesame", "Bitter Gourd", "Bottle Gourd", "Ridge Gourd", "Cucumber"]),
    ("RedSoil_NorthMaharashtra_Kharif", &["Pearl Millet", "Green Gram", "Black Gram", "Sesame", "Cluster Bean"]),
    ("RedSoil_NorthMaharashtra_Rabi", &["Wheat", "Chickpea", "Sunflower", "Mustard", "Fenugreek"]),
    ("RedSoil_NorthMaharashtra_Summer", &["Sesame", "Bitter Gourd", "Ridge Gourd", "Bottle Gourd", "Snake Gourd"]),
    ("AlluvialSoil_Konkan_Kharif", &["Rice", "Sweet Potato", "Turmeric", "Ginger", "Elephant Foot Yam"]),
    ("AlluvialSoil_Konkan_Rabi", &["Pulses", "Sweet Potato", "Elephant Foot Yam", "Onion", "Chillies"]),
    ("AlluvialSoil_Konkan_Summer", &["Bitter Gourd", "Ridge Gourd", "Cucumber", "Snake Gourd", "Chillies"]),
    ("BlackSoil_WesternMaharashtra_Kharif", &["Cotton", "Pigeon Pea", "Soybean", "Green Gram", "Black Eyed Peas"]),
    ("BlackSoil_Konkan_Rabi", &["Groundnut", "Cowpea", "Field Beans", "Hyacinth Beans", "Black Gram"]),
    ("RedSoil_Marathwada_Summer", &["Sesame", "Guar", "Cluster Bean", "Bitter Gourd", "Bottle Gourd"]),
    ("LateriteSoil_NorthMaharashtra_Kharif", &["Rice", "Finger Millet", "Cowpea", "Pigeon Pea", "Sesame"]),
    ("MediumBlackSoil_Konkan_Summer", &["Bitter Gourd", "Ridge Gourd", "Snake Gourd", "Pointed Gourd", "Cucumber"]),
    ("AlluvialSoil_Vidarbha_Rabi", &["Wheat", "Potato", "Onion", "Tomato", "Fenugreek"]),
];

/// soil_season
pub(super) const SOIL_SEASON: &[Entry] = &[
    ("BlackSoil_Kharif", &["Cotton", "Soybean", "Pigeon Pea", "Green Gram", "Black Gram", "Sesame"]),
    ("BlackSoil_Rabi", &["Wheat", "Chickpea", "Safflower", "Linseed", "Mustard", "Coriander"]),
    ("BlackSoil_Summer", &["Sesame", "Cluster Bean", "Mung Bean", "Bottle Gourd", "Watermelon", "Bitter Gourd"]),
    ("RedSoil_Kharif", &["Pearl Millet", "Cluster Bean", "Moth Bean", "Horse Gram", "Sesame", "Cowpea"]),
    ("RedSoil_Rabi", &["Chickpea", "Coriander", "Fenugreek", "Cumin", "Mustard", "Safflower"]),
    ("RedSoil_Summer", &["Sesame", "Guar", "Cluster Bean", "Watermelon", "Muskmelon", "Bitter Gourd"]),
    ("LateriteSoil_Kharif", &["Rice", "Finger Millet", "Cowpea", "Horse Gram", "Sesame", "Little Millet"]),
    ("LateriteSoil_Rabi", &["Finger Millet", "Horse Gram", "Sweet Potato", "Black Gram", "Field Beans", "Amaranth"]),
    ("LateriteSoil_Summer", &["Bitter Gourd", "Ridge Gourd", "Cucumber", "Snake Gourd", "Chillies", "Pointed Gourd"]),
    ("MediumBlackSoil_Kharif", &["Cotton", "Pearl Millet", "Sorghum", "Pigeon Pea", "Green Gram", "Black Gram"]),
    ("MediumBlackSoil_Rabi", &["Wheat", "Chickpea", "Safflower", "Mustard", "Fenugreek", "Linseed"]),
    ("MediumBlackSoil_Summer", &["Sesame", "Cluster Bean", "Bitter Gourd", "Ridge Gourd", "Snake Gourd", "Bottle Gourd"]),
    ("AlluvialSoil_Kharif", &["Rice", "Sugarcane", "Turmeric", "Ginger", "Taro", "Elephant Foot Yam"]),
    ("AlluvialSoil_Rabi", &["Wheat", "Potato", "Onion", "Garlic", "Tomato", "Leafy Vegetables"]),
    ("AlluvialSoil_Summer", &["Muskmelon", "Watermelon", "Cucumber", "Bitter Gourd", "Okra", "Snake Gourd"]),
    ("SandySoil_Kharif", &["Pearl Millet", "Cluster Bean", "Moth Bean", "Cowpea", "Sesame", "Horse Gram"]),
    ("SandySoil_Rabi", &["Cumin", "Mustard", "Chickpea", "Coriander", "Fenugreek", "Isabgol"]),
    ("SandySoil_Summer", &["Watermelon", "Muskmelon", "Cluster Bean", "Cucumber", "Ridge Gourd", "Snake Gourd"]),
];

/// soil
pub(super) const SOIL: &[Entry] = &[
    ("BlackSoil", &["Cotton", "Soybean", "Pigeon Pea", "Chickpea", "Linseed", "Safflower"]),
    ("RedSoil", &["Pearl Millet", "Groundnut", "Sorghum", "Chickpea", "Cluster Bean", "Horse Gram"]),
    ("LateriteSoil", &["Rice", "Finger Millet", "Sweet Potato", "Black Gram", "Horse Gram", "Little Millet"]),
    ("MediumBlackSoil", &["Cotton", "Wheat", "Pearl Millet", "Pigeon Pea", "Chickpea", "Safflower"]),
    ("AlluvialSoil", &["Rice", "Wheat", "Potato", "Sugarcane", "Elephant Foot Yam", "Taro"]),
    ("SandySoil", &["Pearl Millet", "Cluster Bean", "Watermelon", "Muskmelon", "Moth Bean", "Sesame"]),
];

/// Number of alternatives kept per season.
pub const SEASON_VARIANT_COUNT: usize = 3;

/// Alternatives per season, picked by the query's variant index.
pub(super) fn season_variants(season: Season) -> [&'static [&'static str]; SEASON_VARIANT_COUNT] {
    match season {
        Season::Kharif => [
            &["Cowpea", "Black Gram", "Horse Gram", "Pearl Millet", "Finger Millet", "Sorghum"],
            &["Pigeon Pea", "Green Gram", "Sesame", "Little Millet", "Cluster Bean", "Moth Bean"],
            &["Cotton", "Soybean", "Rice", "Turmeric", "Ginger", "Elephant Foot Yam"],
        ],
        Season::Rabi => [
            &["Chickpea", "Mustard", "Linseed", "Safflower", "Coriander", "Cumin"],
            &["Wheat", "Potato", "Onion", "Garlic", "Fenugreek", "Fennel"],
            &["Field Beans", "Garden Pea", "Lentil", "Barley", "Oats", "Spinach"],
        ],
        Season::Summer => [
            &["Watermelon", "Muskmelon", "Cucumber", "Ridge Gourd", "Bottle Gourd", "Snake Gourd"],
            &["Bitter Gourd", "Pointed Gourd", "Okra", "Cluster Bean", "Cowpea", "Guar"],
            &["Sesame", "Mung Bean", "Amaranth", "Roselle", "Sword Bean", "Winged Bean"],
        ],
    }
}

/// Last-resort list; kept clear of the generic set the prompts exclude.
pub const DEFAULT_CROPS: &[&str] = &[
    "Sesame",
    "Black Gram",
    "Cowpea",
    "Finger Millet",
    "Bitter Gourd",
    "Cluster Bean",
];
