//! # ridematch-routing
//!
//! The routing collaborator: given two coordinates, return an ordered path
//! and a scalar distance.
//!
//! The engine treats routing as a black box behind [`RouteProvider`] —
//! synchronous, blocking, non-retried. Every upstream failure surfaces as
//! `RM_ERR_200 RoutingUnavailable` and aborts the calling phase; retry and
//! backoff policy belongs to the caller.
//!
//! [`HttpRouter`] talks to an OSRM-compatible `route/v1/driving` endpoint.
//! The `test-helpers` feature adds [`FixtureRouter`], a deterministic canned
//! provider used by the engine's replay tests.

pub mod client;
mod response;

#[cfg(feature = "test-helpers")]
pub mod fixture;

pub use client::HttpRouter;
#[cfg(feature = "test-helpers")]
pub use fixture::FixtureRouter;

use ridematch_types::{GeoPoint, Result};
use serde::{Deserialize, Serialize};

/// A routed leg between two coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Ordered route geometry, from origin to destination.
    pub path: Vec<GeoPoint>,
    /// Driving distance in meters.
    pub distance_m: f64,
}

/// External routing collaborator contract.
pub trait RouteProvider {
    /// Route from `from` to `to`. Fails with `RoutingUnavailable` on any
    /// non-success upstream response.
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route>;
}

impl<T: RouteProvider + ?Sized> RouteProvider for &T {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route> {
        (**self).route(from, to)
    }
}
