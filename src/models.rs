//! Boundary records exchanged with the surrounding application.
//!
//! The engine reads immutable snapshots; it never mutates or persists a
//! place. Missing text fields and popularity deserialize to empty/zero
//! rather than erroring.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::geo::Point;

/// A point of interest, as projected by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Base popularity, maintained by an external trending job.
    #[serde(default)]
    pub popularity_score: f64,
}

impl Place {
    /// Validated coordinate of this place.
    pub fn point(&self) -> Result<Point, PlanError> {
        Point::new(self.latitude, self.longitude)
    }
}

/// One entry of a route-optimization request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
}

impl RoutePoint {
    pub fn point(&self) -> Result<Point, PlanError> {
        Point::new(self.lat, self.lng)
    }
}

/// Route-optimization response: index orders plus the input records
/// reordered to the optimized visiting sequence.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedRoute {
    pub order: Vec<usize>,
    pub optimized_order: Vec<usize>,
    pub total_distance_km: f64,
    pub route: Vec<RoutePoint>,
}
