//! HTTP handler for place autocomplete

use axum::{
    extract::{Query, State},
    Json,
};
use shared::SuggestionsResponse;

use super::{first_param, QueryPairs};
use crate::services::SuggestionService;
use crate::AppState;

/// Suggest places matching a partial name (`?q=`)
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<SuggestionsResponse> {
    let service = SuggestionService::new(state.geocoding);
    Json(service.suggest(first_param(&params, "q")).await)
}
