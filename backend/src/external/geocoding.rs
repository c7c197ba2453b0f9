//! Geocoding API client
//!
//! Resolves free-text place names through the Open-Meteo geocoding search.

use reqwest::Client;
use serde::Deserialize;

use super::{ensure_success, UpstreamError};
use shared::{Coordinates, PlaceCandidate, ResolvedPlace};

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

/// Search response; `results` is omitted upstream when nothing matches
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

/// One search hit. Autocomplete reads only the naming fields, so the
/// coordinates are checked when a place is resolved, not when decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl GeocodingResponse {
    /// All results, or an empty slice when upstream sent none
    pub fn results(&self) -> &[GeocodingResult] {
        self.results.as_deref().unwrap_or_default()
    }

    /// The best match, if any
    pub fn first(self) -> Option<GeocodingResult> {
        self.results.and_then(|results| results.into_iter().next())
    }
}

impl GeocodingResult {
    pub fn into_candidate(self) -> PlaceCandidate {
        PlaceCandidate::new(self.name, self.admin1, self.country)
    }

    /// The place with its coordinates, or `None` when upstream omitted them
    pub fn into_resolved(self) -> Option<ResolvedPlace> {
        let (latitude, longitude) = self.latitude.zip(self.longitude)?;
        Some(ResolvedPlace {
            name: self.name,
            coordinates: Coordinates::new(latitude, longitude),
        })
    }
}

impl GeocodingClient {
    /// Create a new GeocodingClient from a prepared HTTP client
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Search places by name; `count` caps the number of results
    pub async fn search(
        &self,
        name: &str,
        count: Option<usize>,
    ) -> Result<GeocodingResponse, UpstreamError> {
        let url = format!("{}/search", self.base_url);

        let mut query = vec![("name", name.to_string())];
        if let Some(count) = count {
            query.push(("count", count.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;
        let response = ensure_success(response).await?;

        let data: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        tracing::debug!(
            "Geocoding search for {:?} returned {} results",
            name,
            data.results().len()
        );
        Ok(data)
    }
}
