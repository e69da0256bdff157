//! Blocking HTTP client for an OSRM-compatible routing service.

use std::time::Duration;

use reqwest::{Url, blocking::Client};
use ridematch_types::{GeoPoint, Result, RidematchError, RoutingConfig};

use crate::{Route, RouteProvider, response::parse_route_response};

/// Thin HTTP client for OSRM `route/v1/driving` requests.
#[derive(Debug, Clone)]
pub struct HttpRouter {
    client: Client,
    endpoint: String,
}

impl HttpRouter {
    /// Create a client for the given OSRM endpoint (e.g. `http://localhost:5000`).
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RidematchError::RoutingUnavailable {
                reason: format!("failed to build HTTP client: {err}"),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &RoutingConfig) -> Result<Self> {
        Self::new(&config.endpoint, Duration::from_millis(config.timeout_ms))
    }

    fn route_url(&self, from: GeoPoint, to: GeoPoint) -> Result<Url> {
        // OSRM takes lng,lat pairs.
        let base = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.endpoint, from.lng, from.lat, to.lng, to.lat
        );
        let mut url = Url::parse(&base).map_err(|err| RidematchError::RoutingUnavailable {
            reason: format!("failed to build routing URL: {err}"),
        })?;
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");
        Ok(url)
    }
}

impl RouteProvider for HttpRouter {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Route> {
        let url = self.route_url(from, to)?;
        let response =
            self.client
                .get(url)
                .send()
                .map_err(|err| RidematchError::RoutingUnavailable {
                    reason: format!("routing request failed: {err}"),
                })?;
        let parsed = response
            .json()
            .map_err(|err| RidematchError::RoutingUnavailable {
                reason: format!("malformed routing response: {err}"),
            })?;
        parse_route_response(parsed)
    }
}
