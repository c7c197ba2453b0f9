//! Weather report for a named place

use shared::{require_param, WeatherReport};

use crate::error::{AppError, AppResult};
use crate::external::weather::ForecastRequest;
use crate::external::{GeocodingClient, WeatherClient};

/// Resolves a city and assembles its current, past and forecast weather
#[derive(Clone)]
pub struct WeatherReportService {
    geocoding: GeocodingClient,
    weather: WeatherClient,
}

impl WeatherReportService {
    pub fn new(geocoding: GeocodingClient, weather: WeatherClient) -> Self {
        Self { geocoding, weather }
    }

    /// Build the report for `city`.
    ///
    /// The weather call depends on the coordinates from geocoding, so the two
    /// upstream calls run in sequence. Neither is retried.
    pub async fn report(&self, city: Option<&str>) -> AppResult<WeatherReport> {
        let city = require_param(city, "City")?;

        let place = self
            .geocoding
            .search(city, None)
            .await
            .map_err(|e| AppError::GeocodingFailed(e.to_string()))?
            .first()
            .ok_or(AppError::CityNotFound)?
            .into_resolved()
            .ok_or_else(|| {
                AppError::GeocodingFailed(format!("no coordinates returned for {:?}", city))
            })?;

        tracing::info!(
            "Resolved {:?} to {} ({}, {})",
            city,
            place.name,
            place.coordinates.latitude,
            place.coordinates.longitude
        );

        let request = ForecastRequest::for_coordinates(place.coordinates);
        let forecast = self
            .weather
            .forecast(&request)
            .await
            .map_err(|e| AppError::WeatherFailed(e.to_string()))?;

        let (current, daily) = match (forecast.current, forecast.daily) {
            (Some(current), Some(daily)) => (current, daily),
            _ => return Err(AppError::WeatherDataUnavailable),
        };

        Ok(WeatherReport::assemble(
            place,
            current.into_conditions(),
            daily.into_records(),
        ))
    }
}
