//! The scarcity-first auction: turn an eligibility matrix into concrete
//! driver/rider pairings, seat consumption, and per-user mutations.
//!
//! Riders with the fewest eligible drivers are satisfied first, which keeps
//! riders with many options from starving riders with few. Symmetric ties
//! (equally scarce riders, equally seated drivers) are broken by the
//! deterministic draw, so every replica of the same transaction commits the
//! same pairings.
//!
//! All working state is index-based over the caller's driver/rider slices:
//! a mutable copy of the matrix, a seat vector, and a rider-to-driver
//! ownership vector. The input slices and the persisted matrix are never
//! touched.

use std::collections::BTreeMap;

use ridematch_geo::nearest_projection;
use ridematch_routing::RouteProvider;
use ridematch_types::{
    DriverRef, EligibilityMatrix, GeoPoint, MatchedRider, Result, RidematchError, TxId, UserId,
    UserRecord,
    constants::{DRIVER_DRAW_SEED, RIDE_FARE_TOKENS, RIDER_DRAW_SEED},
};

use crate::{draw::draw_index, eligibility::is_on_route};

/// A rider committed to a driver's route plan, with the rider's requested
/// (not yet projected) endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPickup {
    pub id: UserId,
    pub source: GeoPoint,
    pub destination: GeoPoint,
}

/// A matched driver's realized route and the riders riding it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// The driver's concrete path: the direct route for zero-threshold
    /// drivers, otherwise the deviation route through the first matched
    /// rider's endpoints.
    pub path: Vec<GeoPoint>,
    pub pickups: Vec<PlannedPickup>,
}

/// Everything one assignment run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOutcome {
    /// Route plans keyed by driver ID; only drivers that matched appear.
    pub plans: BTreeMap<UserId, RoutePlan>,
    /// The full per-user mutation set: mutated driver records followed by
    /// mutated rider records, each in snapshot order. Unmatched users are
    /// absent — they must not be rewritten.
    pub mutations: Vec<UserRecord>,
}

impl AssignmentOutcome {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            plans: BTreeMap::new(),
            mutations: Vec::new(),
        }
    }
}

/// Run the scarcity-first auction for one round.
///
/// `drivers` and `riders` must be the identically ordered lists the matrix
/// was built over; a shape mismatch means the matrix is stale and the run
/// is rejected before any work. Seat and token gates are enforced by
/// clearing rows/columns up front rather than by re-filtering the lists,
/// which would skew the matrix indices.
///
/// Routing is only consulted to materialize a matched driver's concrete
/// path; any failure aborts the run with no output.
#[allow(clippy::too_many_lines)]
pub fn run_assignment<R>(
    tx_id: &TxId,
    matrix: &EligibilityMatrix,
    drivers: &[UserRecord],
    riders: &[UserRecord],
    router: &R,
) -> Result<AssignmentOutcome>
where
    R: RouteProvider + ?Sized,
{
    if matrix.driver_count() != drivers.len() || matrix.rider_count() != riders.len() {
        return Err(RidematchError::MatrixShapeMismatch {
            matrix_drivers: matrix.driver_count(),
            matrix_riders: matrix.rider_count(),
            snapshot_drivers: drivers.len(),
            snapshot_riders: riders.len(),
        });
    }
    if drivers.is_empty() || riders.is_empty() {
        return Ok(AssignmentOutcome::empty());
    }

    let mut er = matrix.clone();
    let mut seats: Vec<u32> = drivers.iter().map(|d| d.seats).collect();
    let mut plans: Vec<Option<RoutePlan>> = (0..drivers.len()).map(|_| None).collect();
    let mut owner: Vec<Option<usize>> = vec![None; riders.len()];

    // Capacity and balance gates, without disturbing index alignment.
    for (i, driver) in drivers.iter().enumerate() {
        if driver.seats == 0 {
            er.clear_row(i);
        }
    }
    for (j, rider) in riders.iter().enumerate() {
        if rider.token <= 0 {
            er.clear_column(j);
        }
    }

    let mut offers = er.offers();
    loop {
        // Most scarce riders first: minimum nonzero offer count.
        let Some(min_offer) = offers.iter().copied().filter(|&o| o > 0).min() else {
            break;
        };
        let scarce: Vec<usize> = offers
            .iter()
            .enumerate()
            .filter(|&(_, &o)| o == min_offer)
            .map(|(j, _)| j)
            .collect();
        let r = scarce[draw_index(tx_id.as_str(), RIDER_DRAW_SEED, scarce.len())];

        let eligible = er.eligible_drivers(r);
        let Some(d) = select_driver(&eligible, &seats, tx_id) else {
            return Err(RidematchError::Internal(
                "offer count disagrees with eligibility column".to_string(),
            ));
        };

        if seats[d] == 0 {
            // Exhausted by a prior iteration without its row being cleared
            // yet: drop the row and retry without consuming this rider.
            tracing::warn!(driver = %drivers[d].id, "selected driver has no seats left, clearing row");
            er.clear_row(d);
            offers = er.offers();
            continue;
        }

        // First match for this driver: materialize the concrete path.
        if plans[d].is_none() {
            let driver = &drivers[d];
            let path = if driver.threshold == 0 {
                router.route(driver.source, driver.destination)?.path
            } else {
                let path = deviated_path(driver, &riders[r], router)?;
                // The realized route can newly qualify riders unreachable
                // via the nominal direct path. Only riders still unmatched
                // (and still solvent) are re-admitted.
                for (j, rider) in riders.iter().enumerate() {
                    if j != r && owner[j].is_none() && rider.token > 0 && is_on_route(rider, &path)
                    {
                        er.set(d, j, true);
                    }
                }
                path
            };
            plans[d] = Some(RoutePlan {
                path,
                pickups: Vec::new(),
            });
        }
        if let Some(plan) = plans[d].as_mut() {
            plan.pickups.push(PlannedPickup {
                id: riders[r].id.clone(),
                source: riders[r].source,
                destination: riders[r].destination,
            });
        }
        owner[r] = Some(d);
        tracing::info!(driver = %drivers[d].id, rider = %riders[r].id, "match committed");

        // The rider is satisfied; the driver loses a seat.
        er.clear_column(r);
        seats[d] -= 1;
        if seats[d] == 0 {
            er.clear_row(d);
        }
        offers = er.offers();
    }

    let mutations = apply_matches(&plans, &seats, &owner, drivers, riders)?;

    let mut plans_by_id = BTreeMap::new();
    for (i, plan) in plans.into_iter().enumerate() {
        if let Some(plan) = plan {
            plans_by_id.insert(drivers[i].id.clone(), plan);
        }
    }
    Ok(AssignmentOutcome {
        plans: plans_by_id,
        mutations,
    })
}

/// Pick the driver for a rider: a sole eligible driver wins outright;
/// otherwise the drivers with maximum remaining seats, tie broken by the
/// deterministic draw.
fn select_driver(eligible: &[usize], seats: &[u32], tx_id: &TxId) -> Option<usize> {
    match eligible {
        [] => None,
        [only] => Some(*only),
        _ => {
            let max_seats = eligible.iter().map(|&i| seats[i]).max()?;
            let top: Vec<usize> = eligible
                .iter()
                .copied()
                .filter(|&i| seats[i] == max_seats)
                .collect();
            Some(top[draw_index(tx_id.as_str(), DRIVER_DRAW_SEED, top.len())])
        }
    }
}

/// The driver's deviation route: three routed legs spliced with the
/// duplicated boundary points removed.
fn deviated_path<R>(
    driver: &UserRecord,
    rider: &UserRecord,
    router: &R,
) -> Result<Vec<GeoPoint>>
where
    R: RouteProvider + ?Sized,
{
    let to_pickup = router.route(driver.source, rider.source)?;
    let rider_leg = router.route(rider.source, rider.destination)?;
    let to_dropoff = router.route(rider.destination, driver.destination)?;

    let mut path = to_pickup.path;
    path.extend(rider_leg.path.into_iter().skip(1));
    path.extend(to_dropoff.path.into_iter().skip(1));
    Ok(path)
}

/// Translate committed plans into the per-user mutation set.
fn apply_matches(
    plans: &[Option<RoutePlan>],
    seats: &[u32],
    owner: &[Option<usize>],
    drivers: &[UserRecord],
    riders: &[UserRecord],
) -> Result<Vec<UserRecord>> {
    let mut mutations = Vec::new();

    for (i, driver) in drivers.iter().enumerate() {
        let Some(plan) = &plans[i] else { continue };
        if plan.pickups.is_empty() {
            continue;
        }
        let mut record = driver.clone();
        for pickup in &plan.pickups {
            let (Some(boarding), Some(alighting)) = (
                nearest_projection(&plan.path, pickup.source),
                nearest_projection(&plan.path, pickup.destination),
            ) else {
                return Err(RidematchError::Internal(format!(
                    "empty route plan for driver {}",
                    driver.id
                )));
            };
            record.token += RIDE_FARE_TOKENS;
            record.riders.push(MatchedRider {
                id: pickup.id.clone(),
                boarding: boarding.point,
                alighting: alighting.point,
            });
        }
        record.path = plan.path.clone();
        record.seats = seats[i];
        record.assigned = true;
        mutations.push(record);
    }

    for (j, rider) in riders.iter().enumerate() {
        let Some(d) = owner[j] else { continue };
        let Some(plan) = &plans[d] else {
            return Err(RidematchError::Internal(format!(
                "rider {} owned by a driver without a plan",
                rider.id
            )));
        };
        let (Some(boarding), Some(alighting)) = (
            nearest_projection(&plan.path, rider.source),
            nearest_projection(&plan.path, rider.destination),
        ) else {
            return Err(RidematchError::Internal(format!(
                "empty route plan for rider {}",
                rider.id
            )));
        };
        let mut record = rider.clone();
        record.token -= RIDE_FARE_TOKENS;
        record.driver = Some(DriverRef {
            id: drivers[d].id.clone(),
            boarding: boarding.point,
            alighting: alighting.point,
        });
        // The matched sub-route, boarding through alighting inclusive. A
        // reversed projection (possible on the threshold branch) yields an
        // empty slice.
        record.path = if boarding.index <= alighting.index {
            plan.path[boarding.index..=alighting.index].to_vec()
        } else {
            Vec::new()
        };
        record.assigned = true;
        mutations.push(record);
    }

    Ok(mutations)
}
