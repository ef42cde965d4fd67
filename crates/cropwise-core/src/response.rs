//! Parsing of `generateContent` responses.
//!
//! The model is asked for a bare JSON array but usually wraps it in prose or
//! a code fence, so crop lists are recovered with a greedy bracket match
//! before JSON parsing.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::prompt::STAPLE_CROPS;
use crate::types::CropList;

lazy_static! {
    /// First `[` to last `]`, across newlines.
    static ref JSON_ARRAY_PATTERN: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
}

/// Staple entries at or above which a list counts as generic.
pub const GENERIC_STAPLE_THRESHOLD: usize = 3;

/// Errors from response extraction.
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The response lacks the expected structural path.
    #[error("Unexpected response format: missing {0}")]
    Format(&'static str),

    /// No JSON array could be recovered from the text.
    #[error("Failed to parse crop list: {0}")]
    Parse(String),
}

/// Navigate to `candidates[0].content.parts[0].text`.
pub fn first_candidate_text(response: &JsonValue) -> Result<&str, ResponseError> {
    response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(JsonValue::as_str)
        .ok_or(ResponseError::Format("candidates[0].content.parts[0].text"))
}

/// Extract the trimmed explanation text from a raw response.
pub fn extract_explanation(response: &JsonValue) -> Result<String, ResponseError> {
    Ok(first_candidate_text(response)?.trim().to_string())
}

/// Extract a crop list embedded anywhere in `text`.
///
/// Elements are not type-checked: strings are taken as-is, anything else is
/// rendered as its JSON text.
pub fn extract_crop_list(text: &str) -> Result<CropList, ResponseError> {
    let json_str = JSON_ARRAY_PATTERN
        .find(text)
        .ok_or_else(|| ResponseError::Parse("no JSON array in response text".to_string()))?
        .as_str();

    let items: Vec<JsonValue> =
        serde_json::from_str(json_str).map_err(|e| ResponseError::Parse(e.to_string()))?;

    Ok(items
        .into_iter()
        .map(|item| match item {
            JsonValue::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

/// Extract a crop list from a raw API response.
pub fn crop_list_from_response(response: &JsonValue) -> Result<CropList, ResponseError> {
    extract_crop_list(first_candidate_text(response)?.trim())
}

/// Whether a list is mostly the staple crops the prompts exclude.
///
/// Counts distinct staples, so repeating one staple does not make a list
/// generic.
pub fn is_generic_list(crops: &[String]) -> bool {
    let staples = STAPLE_CROPS
        .iter()
        .filter(|staple| {
            crops
                .iter()
                .any(|crop| staple.eq_ignore_ascii_case(crop.trim()))
        })
        .count();
    staples >= GENERIC_STAPLE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn response_with_text(text: &str) -> JsonValue {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_extract_array_from_prose() {
        let crops = extract_crop_list(r#"Here are crops: ["Okra","Sesame"] - enjoy"#).unwrap();
        assert_eq!(crops, vec!["Okra", "Sesame"]);
    }

    #[test]
    fn test_no_brackets_is_parse_error() {
        let result = extract_crop_list("Okra, Sesame and Cowpea would do well.");
        assert!(matches!(result, Err(ResponseError::Parse(_))));
    }

    #[test]
    fn test_malformed_array_is_parse_error() {
        let result = extract_crop_list(r#"["Okra", "Sesame",]"#);
        assert!(matches!(result, Err(ResponseError::Parse(_))));

        let result = extract_crop_list("[Okra, Sesame]");
        assert!(matches!(result, Err(ResponseError::Parse(_))));
    }

    #[test]
    fn test_array_spanning_code_fence() {
        let text = "```json\n[\n  \"Moth Bean\",\n  \"Horse Gram\"\n]\n```";
        let crops = extract_crop_list(text).unwrap();
        assert_eq!(crops, vec!["Moth Bean", "Horse Gram"]);
    }

    #[test]
    fn test_non_string_elements_are_kept() {
        let crops = extract_crop_list(r#"["Okra", 42, null]"#).unwrap();
        assert_eq!(crops, vec!["Okra", "42", "null"]);
    }

    #[test]
    fn test_explanation_is_trimmed() {
        let response = response_with_text("\n  Medium seeds settle well.  \n");
        assert_eq!(
            extract_explanation(&response).unwrap(),
            "Medium seeds settle well."
        );
    }

    #[test]
    fn test_missing_path_is_format_error() {
        let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(
            extract_explanation(&blocked),
            Err(ResponseError::Format(_))
        ));

        let no_parts = json!({ "candidates": [{ "content": {} }] });
        assert!(matches!(
            crop_list_from_response(&no_parts),
            Err(ResponseError::Format(_))
        ));
    }

    #[test]
    fn test_crop_list_from_response() {
        let response = response_with_text(r#"["Castor", "Sesame", "Pigeon Pea"]"#);
        assert_eq!(
            crop_list_from_response(&response).unwrap(),
            vec!["Castor", "Sesame", "Pigeon Pea"]
        );
    }

    #[test]
    fn test_generic_list_detection() {
        let generic: Vec<String> = ["wheat", "Rice", "Cotton", "Okra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(is_generic_list(&generic));

        let specific: Vec<String> = ["Wheat", "Moth Bean", "Castor", "Sesame"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(!is_generic_list(&specific));
    }

    #[test]
    fn test_repeated_staple_counts_once() {
        let repeated: Vec<String> = ["Wheat", "wheat", " WHEAT ", "Okra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(!is_generic_list(&repeated));

        let distinct: Vec<String> = ["wheat", "Rice", "BAJRA", "Okra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(is_generic_list(&distinct));
    }

    proptest! {
        #[test]
        fn prop_embedded_string_array_round_trips(
            prefix in "[a-zA-Z :,.]{0,40}",
            suffix in "[a-zA-Z :,.]{0,40}",
            crops in prop::collection::vec("[A-Z][a-z]{2,10}( [A-Z][a-z]{2,8})?", 1..8),
        ) {
            let array = serde_json::to_string(&crops).unwrap();
            let text = format!("{prefix}{array}{suffix}");
            prop_assert_eq!(extract_crop_list(&text).unwrap(), crops);
        }

        #[test]
        fn prop_text_without_brackets_never_parses(text in "[^\\[\\]]{0,200}") {
            prop_assert!(extract_crop_list(&text).is_err());
        }
    }
}
