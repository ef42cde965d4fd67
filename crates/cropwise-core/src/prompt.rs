//! Prompt construction for crop recommendations and seed explanations.
//!
//! Recommendation prompts state the four grounding facts (region, season,
//! soil, climate) and explicitly exclude two crop sets that the model falls
//! back to when it answers generically:
//! 1. [`GENERIC_CROPS`] - the default set it returns for almost any input
//! 2. [`STAPLE_CROPS`] - the staples grown everywhere in Maharashtra

use crate::descriptions::{region_description, season_description, soil_description};
use crate::types::{PredictionParams, PredictionResults};

/// Crops the model tends to return regardless of conditions.
pub const GENERIC_CROPS: [&str; 5] = ["Sunflower", "Green Gram", "Vegetables", "Mustard", "Groundnut"];

/// Staple crops excluded to push the model toward specific answers.
pub const STAPLE_CROPS: [&str; 5] = ["Wheat", "Rice", "Cotton", "Jowar", "Bajra"];

/// Build the primary crop recommendation prompt.
pub fn recommendation_prompt(params: &PredictionParams) -> String {
    let generic = GENERIC_CROPS.join(", ");
    let staples = STAPLE_CROPS.join(", ");

    format!(
        r#"
You are an agricultural specialist for Maharashtra, India. Provide VERY SPECIFIC and DIVERSE crop recommendations for this EXACT set of growing conditions.

DETAILED CONDITIONS:
- Region: {region} ({region_info})
- Season: {season} ({season_info})
- Soil Type: {soil} ({soil_info})
- Current Temperature: {temperature}°C
- Soil Moisture: {moisture}%
- Humidity: {humidity}%
- Soil pH: {ph}

YOUR TASK:
Recommend 5-7 UNIQUE crops well-suited to THESE EXACT conditions.

IMPORTANT REQUIREMENTS:
1. DO NOT include the standard set of "{generic}"
2. DO NOT suggest common default crops like "{staples}"
3. TEMPERATURE CONSIDERATION: Select crops that thrive at {temperature}°C
4. MOISTURE CONSIDERATION: Choose crops adapted to {moisture}% soil moisture
5. pH CONSIDERATION: Include crops suited for soil pH {ph}
6. Include at least 2-3 specialty/niche crops specific to these exact conditions
7. Include at least 1-2 high-value cash crops suited for these conditions
8. Strongly consider crops that are known to grow well in {region} specifically during {season}
9. DIVERSITY: Ensure your recommendations span different crop categories (pulses, vegetables, cereals, etc.)

FORMAT:
Respond ONLY with a JSON array of crop names:
["Crop1", "Crop2", "Crop3", "Crop4", "Crop5"]

Do not include explanations or other text."#,
        region = params.region,
        region_info = region_description(&params.region),
        season = params.season,
        season_info = season_description(&params.season),
        soil = params.soil_type,
        soil_info = soil_description(&params.soil_type),
        temperature = params.temperature,
        moisture = params.moisture,
        humidity = params.humidity_or_default(),
        ph = params.soil_ph,
    )
}

/// Alternative prompts tried in order when the primary prompt fails.
///
/// Order: exact exclusion list, specialty crops, cash crops, category
/// diversity.
pub fn retry_candidates(params: &PredictionParams) -> Vec<String> {
    let PredictionParams {
        region,
        season,
        soil_type: soil,
        temperature,
        moisture,
        soil_ph: ph,
        ..
    } = params;

    vec![
        format!(
            "I need 5-7 UNCOMMON crops that grow specifically in {soil} in {region} during {season} \
             with temperature {temperature}°C, moisture {moisture}%, and pH {ph}. DO NOT include wheat, \
             rice, cotton, jowar, bajra, sunflower, green gram, vegetables, mustard, or groundnut in \
             your list. Format as JSON array only: [\"Crop1\", \"Crop2\", \"Crop3\", \"Crop4\", \"Crop5\"]"
        ),
        format!(
            "Provide 5-7 UNIQUE specialty or niche crops suited for {soil} in {region} during {season}. \
             Prioritize uncommon, high-value crops that local farmers might not typically grow but would \
             succeed in these conditions (temp: {temperature}°C, moisture: {moisture}%, pH: {ph}). \
             Provide ONLY a JSON array: [\"Crop1\", \"Crop2\", \"Crop3\", \"Crop4\", \"Crop5\"]"
        ),
        format!(
            "List 5-7 profitable cash crops for {region} with {soil} during {season}. Temperature: \
             {temperature}°C. Exclude common crops (wheat, rice, cotton, jowar, bajra, sunflower, green \
             gram). Return ONLY a JSON array."
        ),
        format!(
            "List 5-7 diverse crops from different categories (at least one pulse, one vegetable, one \
             spice, one oilseed, etc.) suited for {soil} in {season} season in {region}. DO NOT include \
             sunflower, green gram, mustard, groundnut. Return ONLY as JSON array."
        ),
    ]
}

/// Build the prompt asking for a farmer-facing explanation of a prediction.
pub fn explanation_prompt(params: &PredictionParams, results: &PredictionResults) -> String {
    format!(
        r#"
As an agricultural expert, provide a practical and straightforward explanation of why these seed recommendations make sense for a farmer.

INPUTS:
- Crop: {crop}
- Region: {region}
- Season: {season}
- Soil Type: {soil}
- Temperature: {temperature}°C
- Soil Moisture: {moisture}%
- Soil pH: {ph}

PREDICTION RESULTS:
- Recommended Seed Size: {seed_size}
- Sowing Depth: {depth} cm
- Plant Spacing: {spacing} cm

Format your response in simple, farmer-friendly language (about 100 words) that explains:
1. Why this seed size works well for these growing conditions
2. How the recommended sowing depth helps the seeds grow properly
3. Why this plant spacing is good for the crop
4. Include some practical benefits the farmer will see

Avoid complicated scientific terms, percentages, or research-oriented language. Just provide useful, factual information that a farmer can understand and use. Make it conversational and helpful, not technical."#,
        crop = params.crop_name,
        region = params.region,
        season = params.season,
        soil = params.soil_type,
        temperature = params.temperature,
        moisture = params.moisture,
        ph = params.soil_ph,
        seed_size = results.seed_size,
        depth = results.sowing_depth,
        spacing = results.spacing,
    )
}

/// Explanation synthesized locally when the remote call fails.
///
/// Always non-empty: the template text is present even when every field is
/// blank.
pub fn fallback_explanation(params: &PredictionParams, results: &PredictionResults) -> String {
    format!(
        "For growing {crop} in {region} during {season}, {seed_size} seeds work best with your {soil}. \
         Planting at {depth} cm deep protects seeds while allowing them to emerge properly in these \
         conditions. Spacing plants {spacing} cm apart gives them enough room to grow without competing \
         for water and nutrients. This approach helps your plants develop strong roots and produce a good \
         harvest, even considering your soil's pH of {ph} and the local temperature of {temperature}°C. \
         These recommendations are based on what has worked well for farmers in similar conditions.",
        crop = params.crop_name,
        region = params.region,
        season = params.season,
        seed_size = results.seed_size,
        soil = params.soil_type,
        depth = results.sowing_depth,
        spacing = results.spacing,
        ph = params.soil_ph,
        temperature = params.temperature,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptions::{GENERIC_REGION_DESCRIPTION, GENERIC_SOIL_DESCRIPTION};

    fn vidarbha() -> PredictionParams {
        PredictionParams::new("Vidarbha", "Kharif", "Black Soil", 35.0, 20.0, 7.8)
    }

    fn results() -> PredictionResults {
        PredictionResults {
            seed_size: "Medium".to_string(),
            sowing_depth: 4.5,
            spacing: 30.0,
        }
    }

    #[test]
    fn test_recommendation_prompt_states_conditions() {
        let prompt = recommendation_prompt(&vidarbha());

        assert!(prompt.contains("- Region: Vidarbha (hot and dry climate"));
        assert!(prompt.contains("- Season: Kharif (monsoon season"));
        assert!(prompt.contains("- Soil Type: Black Soil (high clay content"));
        assert!(prompt.contains("Current Temperature: 35°C"));
        assert!(prompt.contains("Soil Moisture: 20%"));
        assert!(prompt.contains("Humidity: 60%"));
        assert!(prompt.contains("Soil pH: 7.8"));
    }

    #[test]
    fn test_recommendation_prompt_excludes_default_sets() {
        let prompt = recommendation_prompt(&vidarbha());

        assert!(prompt.contains("Sunflower, Green Gram, Vegetables, Mustard, Groundnut"));
        assert!(prompt.contains("Wheat, Rice, Cotton, Jowar, Bajra"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_unknown_values_use_generic_phrases() {
        let params = PredictionParams::new("Atlantis", "Kharif", "Moon Dust", 25.0, 50.0, 7.0);
        let prompt = recommendation_prompt(&params);

        assert!(prompt.contains(GENERIC_REGION_DESCRIPTION));
        assert!(prompt.contains(GENERIC_SOIL_DESCRIPTION));
    }

    #[test]
    fn test_retry_candidates_order() {
        let candidates = retry_candidates(&vidarbha());

        assert_eq!(candidates.len(), 4);
        assert!(candidates[0].contains("UNCOMMON"));
        assert!(candidates[1].contains("specialty or niche"));
        assert!(candidates[2].contains("cash crops"));
        assert!(candidates[3].contains("different categories"));
        for candidate in &candidates {
            assert!(candidate.contains("Black Soil"));
            assert!(candidate.contains("Vidarbha"));
        }
    }

    #[test]
    fn test_explanation_prompt_covers_results() {
        let params = vidarbha().with_crop_name("Soybean");
        let prompt = explanation_prompt(&params, &results());

        assert!(prompt.contains("- Crop: Soybean"));
        assert!(prompt.contains("Recommended Seed Size: Medium"));
        assert!(prompt.contains("Sowing Depth: 4.5 cm"));
        assert!(prompt.contains("Plant Spacing: 30 cm"));
        assert!(prompt.contains("about 100 words"));
        assert!(prompt.contains("not technical"));
    }

    #[test]
    fn test_fallback_explanation_mentions_results() {
        let params = vidarbha().with_crop_name("Soybean");
        let text = fallback_explanation(&params, &results());

        assert!(text.starts_with("For growing Soybean in Vidarbha during Kharif"));
        assert!(text.contains("4.5 cm deep"));
        assert!(text.contains("30 cm apart"));
        assert!(text.contains("pH of 7.8"));
    }
}
