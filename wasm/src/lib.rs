//! WebAssembly module for City Weather
//!
//! Exposes the server's pure lookups to the browser so the frontend can
//! label cached or offline data with the same rules:
//! - Weather code labels and activity suggestions
//! - Place display formatting
//! - Autocomplete query checks

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::weather_codes::*;

/// Label and suggestion for one weather code
#[derive(Debug, Serialize)]
struct CodeDescription {
    code: i32,
    condition: &'static str,
    activity_suggestion: &'static str,
}

/// Human-readable label for a weather code ("Unknown" when unmapped)
#[wasm_bindgen]
pub fn weather_condition_label(code: i32) -> String {
    shared::weather_condition(code).to_string()
}

/// Activity suggestion for a weather code
#[wasm_bindgen]
pub fn activity_suggestion(code: i32) -> String {
    shared::suggest_activity(code).to_string()
}

/// Label and suggestion for a weather code as a JSON object
#[wasm_bindgen]
pub fn describe_weather_code(code: i32) -> Result<String, JsValue> {
    let description = CodeDescription {
        code,
        condition: shared::weather_condition(code),
        activity_suggestion: shared::suggest_activity(code),
    };
    serde_json::to_string(&description)
        .map_err(|e| JsValue::from_str(&format!("Failed to encode description: {}", e)))
}

/// Display string for a place, e.g. "Paris, Île-de-France, France"
#[wasm_bindgen]
pub fn format_place(name: &str, admin1: &str, country: &str) -> String {
    shared::format_place_display(name, admin1, country)
}

/// Whether the frontend should ask the server for suggestions yet
#[wasm_bindgen]
pub fn should_request_suggestions(query: &str) -> bool {
    shared::is_suggestion_query(Some(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_server() {
        assert_eq!(weather_condition_label(0), "Clear sky");
        assert_eq!(weather_condition_label(12345), "Unknown");
        assert_eq!(
            activity_suggestion(73),
            "Good day for indoor warmth – maybe hot chocolate!"
        );
    }

    #[test]
    fn test_describe_weather_code() {
        let json: serde_json::Value =
            serde_json::from_str(&describe_weather_code(95).unwrap()).unwrap();
        assert_eq!(json["code"], 95);
        assert_eq!(json["condition"], "Thunderstorm");
        assert_eq!(
            json["activity_suggestion"],
            "Check conditions carefully before going out."
        );
    }

    #[test]
    fn test_format_place() {
        assert_eq!(format_place("Paris", "", "France"), "Paris, France");
    }

    #[test]
    fn test_should_request_suggestions() {
        assert!(!should_request_suggestions("L"));
        assert!(should_request_suggestions("Lo"));
    }
}
