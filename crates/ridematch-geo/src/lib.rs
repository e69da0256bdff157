//! # ridematch-geo
//!
//! Pure geometric helpers for the matching engine: haversine great-circle
//! distance and nearest-point projection onto an ordered route.
//!
//! Everything here is a pure function of its inputs — no I/O, no clocks,
//! no entropy — so replicas replaying the same transaction always compute
//! identical results.

pub mod distance;
pub mod projection;

pub use distance::haversine_km;
pub use projection::{Projection, nearest_projection};
