//! Place suggestion models

use serde::{Deserialize, Serialize};

/// Upper bound on the number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 5;

/// A candidate place offered by autocomplete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceCandidate {
    pub name: String,
    pub country: String,
    pub admin1: String,
    pub display: String,
}

impl PlaceCandidate {
    /// Build a candidate, defaulting absent region fields to empty strings
    pub fn new(name: String, admin1: Option<String>, country: Option<String>) -> Self {
        let admin1 = admin1.unwrap_or_default();
        let country = country.unwrap_or_default();
        let display = format_place_display(&name, &admin1, &country);
        Self {
            name,
            country,
            admin1,
            display,
        }
    }
}

/// Join name, region and country with ", ", skipping empty parts
pub fn format_place_display(name: &str, admin1: &str, country: &str) -> String {
    [name, admin1, country]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body of `GET /suggestions`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<PlaceCandidate>,
}

impl SuggestionsResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_all_fields() {
        assert_eq!(
            format_place_display("Paris", "Île-de-France", "France"),
            "Paris, Île-de-France, France"
        );
    }

    #[test]
    fn test_display_missing_admin1() {
        assert_eq!(format_place_display("Paris", "", "France"), "Paris, France");
    }

    #[test]
    fn test_display_missing_country() {
        assert_eq!(format_place_display("Paris", "Texas", ""), "Paris, Texas");
    }

    #[test]
    fn test_display_name_only() {
        assert_eq!(format_place_display("Atlantis", "", ""), "Atlantis");
    }

    #[test]
    fn test_candidate_defaults() {
        let candidate = PlaceCandidate::new("Berlin".to_string(), None, Some("Germany".to_string()));
        assert_eq!(candidate.admin1, "");
        assert_eq!(candidate.country, "Germany");
        assert_eq!(candidate.display, "Berlin, Germany");
    }

    #[test]
    fn test_empty_response_shape() {
        let json = serde_json::to_value(SuggestionsResponse::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "suggestions": [] }));
    }

    proptest! {
        #[test]
        fn prop_display_has_no_separator_artifacts(
            name in "[A-Za-z]{1,12}",
            admin1 in "[A-Za-z ]{0,12}",
            country in "[A-Za-z]{0,12}",
        ) {
            let display = format_place_display(&name, &admin1, &country);
            prop_assert!(display.starts_with(&name));
            prop_assert!(!display.contains(", , "));
            prop_assert!(!display.ends_with(", "));
            prop_assert!(!display.ends_with(','));
        }
    }
}
