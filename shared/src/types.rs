//! Common types used across the service

use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place resolved by the geocoding service
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    /// Canonical name reported upstream, may differ from the query
    pub name: String,
    pub coordinates: Coordinates,
}
