//! HTTP handler for weather reports

use axum::{
    extract::{Query, State},
    Json,
};
use shared::WeatherReport;

use super::{first_param, QueryPairs};
use crate::error::AppResult;
use crate::services::WeatherReportService;
use crate::AppState;

/// Current, past and forecast weather for a city (`?city=`)
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<WeatherReport>> {
    let service = WeatherReportService::new(state.geocoding, state.weather);
    let report = service.report(first_param(&params, "city")).await?;
    Ok(Json(report))
}
