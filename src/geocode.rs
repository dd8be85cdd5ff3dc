//! Nominatim-style geocoding adapter with a static fallback table.
//!
//! The engine itself never needs the network; this adapter exists for
//! callers that accept a city name instead of coordinates. Lookup
//! failures fall back to a small table of known cities, then to a
//! country-centroid default.

use serde::Deserialize;
use tracing::warn;

use crate::geo::Point;

#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "trip-planner".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    config: GeocodeConfig,
    client: reqwest::blocking::Client,
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Looks a city up against the geocoding endpoint.
    ///
    /// `Ok(None)` means the service answered but knows no such city.
    pub fn lookup(&self, city: &str) -> Result<Option<Point>, reqwest::Error> {
        let url = format!("{}/search", self.config.base_url);
        let entries: Vec<NominatimEntry> = self
            .client
            .get(url)
            .query(&[("format", "json"), ("q", city)])
            .send()?
            .error_for_status()?
            .json()?;

        let Some(entry) = entries.first() else {
            return Ok(None);
        };
        match (entry.lat.parse::<f64>(), entry.lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => Ok(Point::new(lat, lon).ok()),
            _ => Ok(None),
        }
    }

    /// Lookup with fallback: network first, then the static table.
    pub fn resolve(&self, city: &str) -> Point {
        match self.lookup(city) {
            Ok(Some(point)) => point,
            Ok(None) => fallback_coordinates(city),
            Err(err) => {
                warn!(city, %err, "geocode lookup failed, using fallback table");
                fallback_coordinates(city)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct NominatimEntry {
    lat: String,
    lon: String,
}

/// Known-city fallback table; unknown cities map to the centroid of
/// India, matching the data set the planner ships with.
pub fn fallback_coordinates(city: &str) -> Point {
    let (lat, lon) = match city.trim().to_lowercase().as_str() {
        "delhi" => (28.6139, 77.2090),
        "mumbai" => (19.0760, 72.8777),
        "chennai" => (13.0827, 80.2707),
        "bangalore" => (12.9716, 77.5946),
        _ => (20.5937, 78.9629),
    };
    Point { lat, lon }
}
