//! Real Delhi locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

// ============================================================================
// Monuments / tourist landmarks
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Red Fort", 28.6562, 77.2410),
    Location::new("India Gate", 28.6129, 77.2295),
    Location::new("Qutub Minar", 28.5245, 77.1855),
    Location::new("Humayun's Tomb", 28.5933, 77.2507),
    Location::new("Lotus Temple", 28.5535, 77.2588),
    Location::new("Jama Masjid", 28.6507, 77.2334),
    Location::new("Akshardham", 28.6127, 77.2773),
];

// ============================================================================
// Dining (noise category for scoring tests)
// ============================================================================

pub const RESTAURANTS: &[Location] = &[
    Location::new("Karim's", 28.6494, 77.2335),
    Location::new("Saravana Bhavan", 28.6328, 77.2197),
    Location::new("Bukhara", 28.5976, 77.1740),
];

/// Connaught Place, a central reference point for radius tests.
pub const CENTER: Location = Location::new("Connaught Place", 28.6315, 77.2167);
