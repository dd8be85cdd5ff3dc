//! Error types for the planning engine.

use thiserror::Error;

/// Errors raised at the engine's input boundary.
///
/// Algorithmic code below the boundary assumes validated input; every
/// variant here is produced before any geometry or search runs.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Latitude/longitude outside valid ranges, or non-finite.
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Route request with too few points to order.
    #[error("need at least {needed} points, got {got}")]
    InsufficientInput { needed: usize, got: usize },

    /// Start index outside the point list.
    #[error("start index {start} out of bounds for {len} points")]
    StartOutOfBounds { start: usize, len: usize },
}
