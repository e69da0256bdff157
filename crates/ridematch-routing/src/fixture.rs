//! Deterministic canned-route provider for tests.
//!
//! Replay tests need routing answers that are exact across runs, so the
//! fixture stores routes keyed by the requested coordinate pair (quantized
//! to microdegrees). A leg with no fixture behaves like a routing outage:
//! the call fails with `RoutingUnavailable`, which is exactly how the
//! mid-build failure scenarios are exercised.

use std::collections::BTreeMap;

use ridematch_geo::haversine_km;
use ridematch_types::{GeoPoint, Result, RidematchError};

use crate::{Route, RouteProvider};

type NodeKey = (i64, i64);
type LegKey = (NodeKey, NodeKey);

/// In-memory [`RouteProvider`] with canned responses.
#[derive(Debug, Clone, Default)]
pub struct FixtureRouter {
    routes: BTreeMap<LegKey, Route>,
}

#[allow(clippy::cast_possible_truncation)]
fn quantize(point: GeoPoint) -> NodeKey {
    ((point.lat * 1e6).round() as i64, (point.lng * 1e6).round() as i64)
}

impl FixtureRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned route for the directed leg `from -> to`.
    pub fn insert(&mut self, from: GeoPoint, to: GeoPoint, route: Route) {
        self.routes.insert((quantize(from), quantize(to)), route);
    }

    /// Register a straight-line route with `nodes` evenly spaced points and
    /// the haversine length of the leg as its driving distance.
    ///
    /// # Panics
    /// Panics if `nodes < 2`; a route needs both endpoints.
    pub fn line(&mut self, from: GeoPoint, to: GeoPoint, nodes: usize) {
        assert!(nodes >= 2, "a line route needs at least two nodes");
        #[allow(clippy::cast_precision_loss)]
        let path = (0..nodes)
            .map(|i| {
                let t = i as f64 / (nodes - 1) as f64;
                GeoPoint::new(
                    from.lat + (to.lat - from.lat) * t,
                    from.lng + (to.lng - from.lng) * t,
                )
            })
            .collect();
        let distance_m = haversine_km(from, to) * 1000.0;
        self.insert(from, to, Route { path, distance_m });
    }

    /// Remove a leg, simulating a routing outage for that pair.
    pub fn remove(&mut self, from: GeoPoint, to: GeoPoint) {
        self.routes.remove(&(quantize(from), quantize(to)));
    }
}

impl RouteProvider for FixtureRouter {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route> {
        self.routes
            .get(&(quantize(from), quantize(to)))
            .cloned()
            .ok_or_else(|| RidematchError::RoutingUnavailable {
                reason: format!("no fixture route from {from} to {to}"),
            })
    }
}
