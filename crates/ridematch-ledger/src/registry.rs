//! User registry operations over the ledger store.
//!
//! Registration creates a record with defaults; ride configuration reshapes
//! it for the next round and resets any previous match state. All writes go
//! through the canonical encoding, and every validation failure happens
//! before any state mutation.

use ridematch_types::{
    GeoPoint, Result, RidematchError, Role, UserId, UserRecord, constants::MATRIX_STATE_KEY,
};

use crate::{canonical::to_canonical_json, store::StateStore};

/// Register a new user with default state (`token = 10`, no role).
pub fn create_user<S>(store: &mut S, id: &UserId) -> Result<UserRecord>
where
    S: StateStore + ?Sized,
{
    if id.as_str().is_empty() {
        return Err(RidematchError::InvalidInput {
            reason: "user ID must not be empty".to_string(),
        });
    }
    if user_exists(store, id)? {
        return Err(RidematchError::DuplicateUser(id.clone()));
    }
    let record = UserRecord::registered(id.clone());
    store.put(id.as_str(), to_canonical_json(&record)?)?;
    tracing::info!(user = %id, "user registered");
    Ok(record)
}

/// Configure a user's ride for the next round: endpoints, role, capacity,
/// deviation tolerance, and projection radius. Clears any previous match
/// state; the token balance carries over.
#[allow(clippy::too_many_arguments)]
pub fn configure_ride<S>(
    store: &mut S,
    id: &UserId,
    source: GeoPoint,
    destination: GeoPoint,
    role: Role,
    seats: u32,
    threshold: u32,
    radius: f64,
) -> Result<UserRecord>
where
    S: StateStore + ?Sized,
{
    if !source.is_valid() {
        return Err(RidematchError::InvalidInput {
            reason: format!("invalid source coordinate {source}"),
        });
    }
    if !destination.is_valid() {
        return Err(RidematchError::InvalidInput {
            reason: format!("invalid destination coordinate {destination}"),
        });
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(RidematchError::InvalidInput {
            reason: format!("invalid radius {radius}"),
        });
    }

    let mut record = read_user(store, id)?;
    record.source = source;
    record.destination = destination;
    record.role = Some(role);
    record.seats = seats;
    record.threshold = threshold;
    record.radius = radius;
    record.path.clear();
    record.riders.clear();
    record.driver = None;
    record.assigned = false;

    store.put(id.as_str(), to_canonical_json(&record)?)?;
    tracing::info!(user = %id, %role, "ride configured");
    Ok(record)
}

/// Read one user record; absent keys are `UnknownUser`.
pub fn read_user<S>(store: &S, id: &UserId) -> Result<UserRecord>
where
    S: StateStore + ?Sized,
{
    let Some(bytes) = store.get(id.as_str())? else {
        return Err(RidematchError::UnknownUser(id.clone()));
    };
    serde_json::from_slice(&bytes).map_err(|err| RidematchError::Serialization(err.to_string()))
}

pub fn user_exists<S>(store: &S, id: &UserId) -> Result<bool>
where
    S: StateStore + ?Sized,
{
    Ok(store.get(id.as_str())?.is_some())
}

/// All user records, sorted by ID.
///
/// The scan is unordered by contract; sorting here is what makes matrix
/// indices replica-stable, since both phases derive their driver/rider
/// lists from this snapshot.
pub fn snapshot_users<S>(store: &S) -> Result<Vec<UserRecord>>
where
    S: StateStore + ?Sized,
{
    let mut users = Vec::new();
    for (key, bytes) in store.scan_all()? {
        if key == MATRIX_STATE_KEY {
            continue;
        }
        match serde_json::from_slice::<UserRecord>(&bytes) {
            Ok(record) => users.push(record),
            Err(err) => {
                // Non-user payload under some other key; not ours to touch.
                tracing::debug!(%key, %err, "skipping non-user ledger entry");
            }
        }
    }
    users.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(users)
}

/// Number of users not yet assigned in the current round.
pub fn unassigned_count<S>(store: &S) -> Result<usize>
where
    S: StateStore + ?Sized,
{
    Ok(snapshot_users(store)?
        .iter()
        .filter(|user| !user.assigned)
        .count())
}
