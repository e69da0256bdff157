//! Haversine great-circle distance.

use ridematch_types::{GeoPoint, constants::EARTH_RADIUS_KM};

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine formula with Earth radius 6371 km. NaN coordinates propagate
/// to a NaN result rather than an error; input validation belongs to the
/// ledger-facing layer.
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
