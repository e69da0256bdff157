//! Eligibility-matrix construction.
//!
//! For every (driver, rider) pair, decide compatibility:
//!
//! - A zero-threshold driver takes a rider only if both rider endpoints
//!   project onto the driver's direct path within the rider's radius, in
//!   direction of travel.
//! - Otherwise the three-leg deviated route (driver source -> rider source
//!   -> rider destination -> driver destination) must not lengthen the
//!   direct route by more than the driver's threshold percent.
//!
//! Any routing failure aborts the whole build — no partial matrix escapes.

use ridematch_geo::nearest_projection;
use ridematch_routing::RouteProvider;
use ridematch_types::{EligibilityMatrix, GeoPoint, Result, UserRecord};

/// Build the eligibility matrix for the round's filtered driver/rider lists.
///
/// The order of `drivers` and `riders` defines the matrix indices; callers
/// must present identically ordered lists on every replica.
pub fn build_eligibility<R>(
    drivers: &[UserRecord],
    riders: &[UserRecord],
    router: &R,
) -> Result<EligibilityMatrix>
where
    R: RouteProvider + ?Sized,
{
    let mut matrix = EligibilityMatrix::new(drivers.len(), riders.len());

    for (i, driver) in drivers.iter().enumerate() {
        let direct = router.route(driver.source, driver.destination)?;
        tracing::debug!(
            driver = %driver.id,
            nodes = direct.path.len(),
            distance_m = direct.distance_m,
            "direct route fetched"
        );

        for (j, rider) in riders.iter().enumerate() {
            let eligible = if driver.threshold == 0 {
                is_on_route(rider, &direct.path)
            } else {
                let deviated_m = deviated_length(driver, rider, router)?;
                let limit_m = direct.distance_m * (1.0 + f64::from(driver.threshold) / 100.0);
                deviated_m <= limit_m
            };
            matrix.set(i, j, eligible);
        }
    }

    tracing::debug!(
        drivers = drivers.len(),
        riders = riders.len(),
        "eligibility matrix built"
    );
    Ok(matrix)
}

/// Whether a rider's endpoints lie on `path` within the rider's radius,
/// with the source projecting strictly before the destination.
///
/// The direction-of-travel constraint rejects riders whose destination
/// projects earlier on the path than their source, no matter how close
/// both points are geometrically.
#[must_use]
pub fn is_on_route(rider: &UserRecord, path: &[GeoPoint]) -> bool {
    let (Some(source), Some(destination)) = (
        nearest_projection(path, rider.source),
        nearest_projection(path, rider.destination),
    ) else {
        return false;
    };
    source.distance_km <= rider.radius
        && destination.distance_km <= rider.radius
        && source.index < destination.index
}

/// Total driving distance of the deviated route through the rider's
/// endpoints, in meters.
fn deviated_length<R>(
    driver: &UserRecord,
    rider: &UserRecord,
    router: &R,
) -> Result<f64>
where
    R: RouteProvider + ?Sized,
{
    let to_pickup = router.route(driver.source, rider.source)?;
    let rider_leg = router.route(rider.source, rider.destination)?;
    let to_dropoff = router.route(rider.destination, driver.destination)?;
    Ok(to_pickup.distance_m + rider_leg.distance_m + to_dropoff.distance_m)
}

#[cfg(test)]
mod tests {
    use ridematch_routing::FixtureRouter;
    use ridematch_types::{Role, UserId};

    use super::*;

    fn driver(id: &str, from: GeoPoint, to: GeoPoint, threshold: u32) -> UserRecord {
        let mut user = UserRecord::registered(UserId::from(id));
        user.role = Some(Role::Driver);
        user.source = from;
        user.destination = to;
        user.seats = 2;
        user.threshold = threshold;
        user
    }

    fn rider(id: &str, from: GeoPoint, to: GeoPoint, radius: f64) -> UserRecord {
        let mut user = UserRecord::registered(UserId::from(id));
        user.role = Some(Role::Rider);
        user.source = from;
        user.destination = to;
        user.radius = radius;
        user
    }

    const A: GeoPoint = GeoPoint::new(0.0, 0.00);
    const B: GeoPoint = GeoPoint::new(0.0, 0.04);

    #[test]
    fn rider_on_direct_path_is_eligible() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        let d = driver("d1", A, B, 0);
        let r = rider("r1", GeoPoint::new(0.0, 0.01), GeoPoint::new(0.0, 0.03), 1.0);
        let matrix = build_eligibility(&[d], &[r], &router).unwrap();
        assert!(matrix.get(0, 0));
    }

    #[test]
    fn reverse_direction_rider_is_rejected() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        let d = driver("d1", A, B, 0);
        // Destination projects before source on the path.
        let r = rider("r1", GeoPoint::new(0.0, 0.03), GeoPoint::new(0.0, 0.01), 1.0);
        let matrix = build_eligibility(&[d], &[r], &router).unwrap();
        assert!(!matrix.get(0, 0));
    }

    #[test]
    fn rider_outside_radius_is_rejected() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        let d = driver("d1", A, B, 0);
        // ~1.1 km off the path, radius 0.5 km.
        let r = rider("r1", GeoPoint::new(0.01, 0.01), GeoPoint::new(0.01, 0.03), 0.5);
        let matrix = build_eligibility(&[d], &[r], &router).unwrap();
        assert!(!matrix.get(0, 0));
    }

    #[test]
    fn zero_radius_requires_exact_nodes() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        let d = driver("d1", A, B, 0);
        let exact = rider("r1", GeoPoint::new(0.0, 0.01), GeoPoint::new(0.0, 0.03), 0.0);
        let off = rider("r2", GeoPoint::new(0.0, 0.011), GeoPoint::new(0.0, 0.03), 0.0);
        let matrix = build_eligibility(&[d], &[exact, off], &router).unwrap();
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(0, 1));
    }

    #[test]
    fn threshold_admits_bounded_deviation() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        let rs = GeoPoint::new(0.001, 0.01);
        let rd = GeoPoint::new(0.001, 0.03);
        // Deviation legs: slightly longer than the direct route in total.
        router.line(A, rs, 2);
        router.line(rs, rd, 3);
        router.line(rd, B, 2);

        let d = driver("d1", A, B, 20);
        let r = rider("r1", rs, rd, 1.0);
        let matrix = build_eligibility(&[d], &[r], &router).unwrap();
        assert!(matrix.get(0, 0));
    }

    #[test]
    fn threshold_rejects_excessive_deviation() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        // Far off the corridor: the detour roughly triples the route.
        let rs = GeoPoint::new(0.05, 0.01);
        let rd = GeoPoint::new(0.05, 0.03);
        router.line(A, rs, 2);
        router.line(rs, rd, 3);
        router.line(rd, B, 2);

        let d = driver("d1", A, B, 10);
        let r = rider("r1", rs, rd, 1.0);
        let matrix = build_eligibility(&[d], &[r], &router).unwrap();
        assert!(!matrix.get(0, 0));
    }

    #[test]
    fn routing_failure_aborts_the_build() {
        // No fixture for the driver's direct leg.
        let router = FixtureRouter::new();
        let d = driver("d1", A, B, 0);
        let r = rider("r1", GeoPoint::new(0.0, 0.01), GeoPoint::new(0.0, 0.03), 1.0);
        assert!(build_eligibility(&[d], &[r], &router).is_err());
    }

    #[test]
    fn rebuild_on_unchanged_inputs_is_identical() {
        let mut router = FixtureRouter::new();
        router.line(A, B, 5);

        let d = driver("d1", A, B, 0);
        let r1 = rider("r1", GeoPoint::new(0.0, 0.01), GeoPoint::new(0.0, 0.03), 1.0);
        let r2 = rider("r2", GeoPoint::new(0.0, 0.03), GeoPoint::new(0.0, 0.01), 1.0);

        let first = build_eligibility(&[d.clone()], &[r1.clone(), r2.clone()], &router).unwrap();
        let second = build_eligibility(&[d], &[r1, r2], &router).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn empty_path_never_matches() {
        let r = rider("r1", A, B, 10.0);
        assert!(!is_on_route(&r, &[]));
    }
}
