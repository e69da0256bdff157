//! System-wide constants for the Ridematch engine.

/// Earth radius in kilometers for the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Tokens granted to every newly registered user.
pub const REGISTRATION_TOKEN_GRANT: i64 = 10;

/// Tokens transferred per matched rider: the driver is credited this amount,
/// the rider debited it.
pub const RIDE_FARE_TOKENS: i64 = 2;

/// Ledger key under which the round's eligibility matrix is persisted.
pub const MATRIX_STATE_KEY: &str = "eligibility-matrix";

/// Draw seed for rider tie-breaking. Must differ from [`DRIVER_DRAW_SEED`]
/// so the two draws within one transaction are independent.
pub const RIDER_DRAW_SEED: &str = "rider";

/// Draw seed for driver tie-breaking.
pub const DRIVER_DRAW_SEED: &str = "driver";

/// Default routing service endpoint (OSRM-compatible).
pub const DEFAULT_ROUTING_ENDPOINT: &str = "http://localhost:5000";

/// Default routing request timeout in milliseconds.
pub const DEFAULT_ROUTING_TIMEOUT_MS: u64 = 3_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Ridematch";
