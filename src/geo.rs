//! Geographic points and great-circle distance.
//!
//! Haversine on a spherical Earth. Less accurate than an ellipsoid model
//! (WGS84 differs by up to ~0.5%) but plenty for ranking and day-trip
//! routing.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Creates a validated point.
    ///
    /// Rejects non-finite values and coordinates outside
    /// lat ∈ [-90, 90], lon ∈ [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, PlanError> {
        if !lat.is_finite() || !lon.is_finite() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(PlanError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Symmetric and zero for coincident points. Assumes validated input;
/// NaN coordinates produce NaN output.
pub fn distance_km(a: Point, b: Point) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
