//! Weather API client for fetching weather data
//!
//! Integrates with the Open-Meteo forecast API for current conditions,
//! recent history and the daily forecast in a single call.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{ensure_success, UpstreamError};
use shared::{CurrentConditions, Coordinates, DailyRecord, FORECAST_DAYS, PAST_DAYS};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weathercode,windspeed_10m";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode,windspeed_10m_max";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Query sent to the forecast endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub current: &'static str,
    pub daily: &'static str,
    pub forecast_days: usize,
    pub past_days: usize,
    pub timezone: &'static str,
}

impl ForecastRequest {
    /// Current conditions plus a week of history and a week of forecast,
    /// with dates in the location's own timezone
    pub fn for_coordinates(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            current: CURRENT_FIELDS,
            daily: DAILY_FIELDS,
            forecast_days: FORECAST_DAYS,
            past_days: PAST_DAYS,
            timezone: "auto",
        }
    }
}

/// Forecast response. Either section may be missing.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentSection>,
    pub daily: Option<DailySection>,
}

/// Current readings; upstream reports `null` for gaps
#[derive(Debug, Deserialize)]
pub struct CurrentSection {
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<Number>,
    #[serde(default)]
    pub weathercode: Option<i32>,
    #[serde(default)]
    pub windspeed_10m: Option<f64>,
}

/// Daily values as parallel arrays indexed like `time`
#[derive(Debug, Deserialize)]
pub struct DailySection {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Vec<Option<i32>>,
    #[serde(default)]
    pub windspeed_10m_max: Vec<Option<f64>>,
}

impl CurrentSection {
    pub fn into_conditions(self) -> CurrentConditions {
        CurrentConditions::from_reading(
            self.temperature_2m,
            self.relative_humidity_2m,
            self.windspeed_10m,
            self.weathercode,
        )
    }
}

impl DailySection {
    /// One record per entry of `time`, in upstream order
    pub fn into_records(self) -> Vec<DailyRecord> {
        self.time
            .iter()
            .enumerate()
            .map(|(i, date)| DailyRecord {
                date: date.clone(),
                max_temp_c: value_at(&self.temperature_2m_max, i),
                min_temp_c: value_at(&self.temperature_2m_min, i),
                max_windspeed_kmh: value_at(&self.windspeed_10m_max, i),
                weathercode: value_at(&self.weathercode, i),
            })
            .collect()
    }
}

fn value_at<T: Copy>(values: &[Option<T>], i: usize) -> Option<T> {
    values.get(i).copied().flatten()
}

impl WeatherClient {
    /// Create a new WeatherClient from a prepared HTTP client
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current conditions and the daily series
    pub async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResponse, UpstreamError> {
        let url = format!("{}/forecast", self.base_url);

        let response = self.client.get(&url).query(request).send().await?;
        let response = ensure_success(response).await?;

        let data: ForecastResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        tracing::debug!(
            "Forecast for ({}, {}) fetched, current: {}, daily: {}",
            request.latitude,
            request.longitude,
            data.current.is_some(),
            data.daily.is_some()
        );
        Ok(data)
    }
}
