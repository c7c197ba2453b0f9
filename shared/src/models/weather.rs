//! Weather report models

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::types::ResolvedPlace;
use crate::weather_codes::{
    suggest_activity, weather_condition, DEFAULT_ACTIVITY, UNKNOWN_CONDITION,
};

/// Days of history requested from upstream; the daily series is split at this index
pub const PAST_DAYS: usize = 7;

/// Days of forecast requested from upstream
pub const FORECAST_DAYS: usize = 7;

/// Current conditions annotated with a label and an activity suggestion.
/// Readings upstream could not provide are `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: Option<f64>,
    /// Echoed as upstream sent it, so an integer stays an integer
    pub humidity_percent: Option<Number>,
    pub windspeed_kmh: Option<f64>,
    pub condition: String,
    pub activity_suggestion: String,
}

impl CurrentConditions {
    /// Annotate a reading; a missing code is labelled like an unmapped one
    pub fn from_reading(
        temperature_c: Option<f64>,
        humidity_percent: Option<Number>,
        windspeed_kmh: Option<f64>,
        weathercode: Option<i32>,
    ) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            windspeed_kmh,
            condition: weathercode
                .map_or(UNKNOWN_CONDITION, weather_condition)
                .to_string(),
            activity_suggestion: weathercode
                .map_or(DEFAULT_ACTIVITY, suggest_activity)
                .to_string(),
        }
    }
}

/// One day of the daily series. Values upstream could not provide are `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    /// ISO date (YYYY-MM-DD) in the location's timezone
    pub date: String,
    pub max_temp_c: Option<f64>,
    pub min_temp_c: Option<f64>,
    pub max_windspeed_kmh: Option<f64>,
    pub weathercode: Option<i32>,
}

/// Body of `GET /weather`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub current_weather: CurrentConditions,
    pub past_weather: Vec<DailyRecord>,
    pub daily_weather: Vec<DailyRecord>,
}

impl WeatherReport {
    /// Assemble a report, splitting the chronological daily series into history and forecast
    pub fn assemble(
        place: ResolvedPlace,
        current_weather: CurrentConditions,
        daily: Vec<DailyRecord>,
    ) -> Self {
        let (past_weather, daily_weather) = split_daily_records(daily);
        Self {
            city: place.name,
            latitude: place.coordinates.latitude,
            longitude: place.coordinates.longitude,
            current_weather,
            past_weather,
            daily_weather,
        }
    }
}

/// Split a chronological daily series positionally: the first [`PAST_DAYS`]
/// entries are history, the remainder is forecast.
///
/// No dates are inspected. A series shorter than [`PAST_DAYS`] yields an
/// empty forecast.
pub fn split_daily_records(mut records: Vec<DailyRecord>) -> (Vec<DailyRecord>, Vec<DailyRecord>) {
    let forecast = if records.len() > PAST_DAYS {
        records.split_off(PAST_DAYS)
    } else {
        Vec::new()
    };
    (records, forecast)
}
