//! Place name autocomplete

use shared::{is_suggestion_query, SuggestionsResponse, MAX_SUGGESTIONS};

use crate::external::GeocodingClient;

/// Turns partial place names into a short list of candidates
#[derive(Clone)]
pub struct SuggestionService {
    geocoding: GeocodingClient,
}

impl SuggestionService {
    pub fn new(geocoding: GeocodingClient) -> Self {
        Self { geocoding }
    }

    /// Suggest places for a partial query.
    ///
    /// Never fails: short queries are answered without an upstream call and
    /// upstream failures degrade to an empty list.
    pub async fn suggest(&self, query: Option<&str>) -> SuggestionsResponse {
        let query = match query {
            Some(q) if is_suggestion_query(Some(q)) => q,
            _ => return SuggestionsResponse::empty(),
        };

        let response = match self.geocoding.search(query, Some(MAX_SUGGESTIONS)).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Suggestion lookup for {:?} failed: {}", query, e);
                return SuggestionsResponse::empty();
            }
        };

        let suggestions = response
            .results
            .unwrap_or_default()
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|result| result.into_candidate())
            .collect();

        SuggestionsResponse { suggestions }
    }
}
