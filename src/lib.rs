//! trip-planner core engine
//!
//! Route optimization (nearest-neighbor construction + 2-opt improvement)
//! and relevance ranking for points of interest. Storage, HTTP routing and
//! third-party API clients live in the surrounding application; this crate
//! is pure functions over explicit inputs, except for the optional geocode
//! adapter.

pub mod error;
pub mod filter;
pub mod geo;
pub mod geocode;
pub mod matrix;
pub mod models;
pub mod recommend;
pub mod scoring;
pub mod solver;

pub use error::PlanError;
pub use geo::{Point, distance_km};
pub use matrix::DistanceMatrix;
pub use solver::{RouteSummary, SolveOptions, optimize_route, plan_route};
