//! Radius filtering with a bounding-box pre-filter.
//!
//! The exact haversine test is authoritative; the box only narrows the
//! candidate set before the trig-heavy check.

use rayon::prelude::*;

use crate::geo::{Point, distance_km};
use crate::models::Place;

/// Kilometers per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.0;

/// Cosine floor for the longitude span; below this the box degenerates
/// to the full longitude range rather than dividing by ~0 near a pole.
const MIN_COS_LAT: f64 = 1e-6;

/// True iff `candidate` lies within `radius_km` of `center`.
pub fn within_radius(center: Point, candidate: Point, radius_km: f64) -> bool {
    distance_km(center, candidate) <= radius_km
}

/// Rectangular over-approximation of a radius around a center point.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// Box guaranteed to contain every point within `radius_km` of
    /// `center`, using the flat-degree approximation.
    pub fn around(center: Point, radius_km: f64) -> Self {
        let delta_lat = radius_km / KM_PER_DEGREE;
        let cos_lat = center.lat.to_radians().cos();
        let delta_lon = if cos_lat < MIN_COS_LAT {
            180.0
        } else {
            (radius_km / (KM_PER_DEGREE * cos_lat)).min(180.0)
        };

        Self {
            min_lat: center.lat - delta_lat,
            max_lat: center.lat + delta_lat,
            min_lon: center.lon - delta_lon,
            max_lon: center.lon + delta_lon,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        if p.lat < self.min_lat || p.lat > self.max_lat {
            return false;
        }
        // Boxes near the antimeridian extend past ±180 and wrap: the
        // longitude interval becomes two pieces on the other side.
        if self.max_lon - self.min_lon >= 360.0 {
            true
        } else if self.min_lon < -180.0 {
            p.lon <= self.max_lon || p.lon >= self.min_lon + 360.0
        } else if self.max_lon > 180.0 {
            p.lon >= self.min_lon || p.lon <= self.max_lon - 360.0
        } else {
            p.lon >= self.min_lon && p.lon <= self.max_lon
        }
    }
}

/// Filters places to those within `radius_km` of `center`.
///
/// Box pre-check first, exact test second. Places with malformed stored
/// coordinates are skipped, not errors.
pub fn places_within_radius(places: &[Place], center: Point, radius_km: f64) -> Vec<Place> {
    let bbox = BoundingBox::around(center, radius_km);
    places
        .par_iter()
        .filter(|place| match place.point() {
            Ok(p) => bbox.contains(p) && within_radius(center, p, radius_km),
            Err(_) => false,
        })
        .cloned()
        .collect()
}
