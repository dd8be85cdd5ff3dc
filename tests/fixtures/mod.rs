//! Test fixtures for trip-planner.
//!
//! Provides real Delhi locations (from OpenStreetMap) and builders for
//! place records and route-request bodies.

pub mod delhi_places;

pub use delhi_places::*;

use trip_planner::geo::Point;
use trip_planner::models::{Place, RoutePoint};

/// Builder for place records with sensible defaults.
#[derive(Debug, Clone)]
pub struct PlaceBuilder {
    place: Place,
}

impl PlaceBuilder {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            place: Place {
                id,
                name: name.to_string(),
                category: String::new(),
                address: String::new(),
                description: String::new(),
                latitude: CENTER.lat,
                longitude: CENTER.lng,
                popularity_score: 0.0,
            },
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.place.category = category.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.place.address = address.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.place.description = description.to_string();
        self
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.place.latitude = lat;
        self.place.longitude = lng;
        self
    }

    pub fn popularity(mut self, score: f64) -> Self {
        self.place.popularity_score = score;
        self
    }

    pub fn build(self) -> Place {
        self.place
    }
}

/// Landmarks as validated points, in fixture order.
pub fn landmark_points() -> Vec<Point> {
    LANDMARKS
        .iter()
        .map(|loc| Point::new(loc.lat, loc.lng).expect("fixture coordinates are valid"))
        .collect()
}

/// Landmarks as a route-request body, ids 1..=n in fixture order.
pub fn landmark_route_points() -> Vec<RoutePoint> {
    LANDMARKS
        .iter()
        .enumerate()
        .map(|(i, loc)| RoutePoint {
            id: i as i64 + 1,
            lat: loc.lat,
            lng: loc.lng,
        })
        .collect()
}

/// Dining places, the noise category for scoring tests.
pub fn restaurant_places() -> Vec<Place> {
    RESTAURANTS
        .iter()
        .enumerate()
        .map(|(i, loc)| {
            PlaceBuilder::new(100 + i as i64, loc.name)
                .category("restaurant")
                .address("Delhi")
                .location(loc.lat, loc.lng)
                .popularity(5.0)
                .build()
        })
        .collect()
}

/// Landmark places with tourist categories and mild popularity spread.
pub fn landmark_places() -> Vec<Place> {
    LANDMARKS
        .iter()
        .enumerate()
        .map(|(i, loc)| {
            PlaceBuilder::new(i as i64 + 1, loc.name)
                .category("monument")
                .address("Delhi")
                .location(loc.lat, loc.lng)
                .popularity(i as f64)
                .build()
        })
        .collect()
}
