//! Nearest-point projection onto an ordered route.

use ridematch_types::GeoPoint;

use crate::haversine_km;

/// An arbitrary coordinate mapped onto the closest node of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Index of the winning node in the path.
    pub index: usize,
    /// The winning node itself.
    pub point: GeoPoint,
    /// Haversine distance from the target to the winning node, km.
    pub distance_km: f64,
}

/// Project `target` onto the path node that minimizes haversine distance.
///
/// Ties are broken by first occurrence (lowest index): the comparison is
/// strict, so a later node at exactly the same distance never wins. The
/// auction's replay guarantee depends on this order-dependent choice, and on
/// scanning the path front to back.
///
/// Returns `None` for an empty path.
#[must_use]
pub fn nearest_projection(path: &[GeoPoint], target: GeoPoint) -> Option<Projection> {
    let mut best: Option<Projection> = None;
    for (index, &point) in path.iter().enumerate() {
        let distance_km = haversine_km(point, target);
        let closer = match &best {
            Some(current) => distance_km < current.distance_km,
            None => true,
        };
        if closer {
            best = Some(Projection {
                index,
                point,
                distance_km,
            });
        }
    }
    best
}
