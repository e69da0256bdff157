//! Configuration types for Ridematch collaborators.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the external routing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL of an OSRM-compatible routing service.
    pub endpoint: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ROUTING_ENDPOINT.to_string(),
            timeout_ms: constants::DEFAULT_ROUTING_TIMEOUT_MS,
        }
    }
}
