//! OSRM wire types and response validation.

use ridematch_types::{GeoPoint, Result, RidematchError};

use crate::Route;

#[derive(serde::Deserialize)]
pub(crate) struct OsrmRouteResponse {
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) routes: Vec<OsrmRoute>,
}

#[derive(serde::Deserialize)]
pub(crate) struct OsrmRoute {
    pub(crate) distance: f64,
    pub(crate) geometry: OsrmGeometry,
}

#[derive(serde::Deserialize)]
pub(crate) struct OsrmGeometry {
    /// GeoJSON `[lng, lat]` pairs.
    pub(crate) coordinates: Vec<[f64; 2]>,
}

/// Validate the response code and convert the first route to engine types.
pub(crate) fn parse_route_response(response: OsrmRouteResponse) -> Result<Route> {
    if response.code != "Ok" {
        return Err(RidematchError::RoutingUnavailable {
            reason: format!("routing service returned code {}", response.code),
        });
    }
    let Some(route) = response.routes.into_iter().next() else {
        return Err(RidematchError::RoutingUnavailable {
            reason: "routing service returned no routes".to_string(),
        });
    };
    let path = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| GeoPoint::new(lat, lng))
        .collect();
    Ok(Route {
        path,
        distance_m: route.distance,
    })
}
