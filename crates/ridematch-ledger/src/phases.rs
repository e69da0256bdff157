//! The two externally triggerable matching phases.
//!
//! Each phase is one logical ledger operation: snapshot, pure computation,
//! then persistence. Computation happens entirely before the first write,
//! so a routing failure aborts with the ledger untouched; atomicity of the
//! writes themselves is the enclosing transaction's guarantee.
//!
//! The assignment phase must only run once the matrix phase's write is
//! durable — sequencing that handoff (and any retry policy) belongs to the
//! caller, not to this crate.

use ridematch_matchcore::{build_eligibility, compute_mutation_root, mutation_root_hex, run_assignment};
use ridematch_routing::RouteProvider;
use ridematch_types::{EligibilityMatrix, Result, TxId, UserId, UserRecord};

use crate::{
    canonical::to_canonical_json,
    matrix_store::{load_matrix, save_matrix},
    registry::snapshot_users,
    store::StateStore,
};

fn round_participants(users: &[UserRecord]) -> (Vec<UserRecord>, Vec<UserRecord>) {
    let drivers = users
        .iter()
        .filter(|u| u.is_unassigned_driver())
        .cloned()
        .collect();
    let riders = users
        .iter()
        .filter(|u| u.is_unassigned_rider())
        .cloned()
        .collect();
    (drivers, riders)
}

/// Phase one: build this round's eligibility matrix and persist it.
///
/// The snapshot is sorted by user ID, so the matrix indices are identical
/// on every replica. Nothing is written unless the whole build succeeds;
/// a failed build leaves any previous matrix in place.
pub fn run_matrix_phase<S, R>(store: &mut S, router: &R) -> Result<EligibilityMatrix>
where
    S: StateStore + ?Sized,
    R: RouteProvider + ?Sized,
{
    let users = snapshot_users(store)?;
    let (drivers, riders) = round_participants(&users);

    let matrix = build_eligibility(&drivers, &riders, router)?;
    save_matrix(store, &matrix)?;
    tracing::info!(
        drivers = drivers.len(),
        riders = riders.len(),
        "eligibility matrix persisted"
    );
    Ok(matrix)
}

/// Phase two: run the auction against the persisted matrix and write every
/// mutated record back canonically. Returns the mutated user IDs in
/// persistence order.
///
/// With no unassigned drivers or no unassigned riders the phase is a no-op
/// — no matrix is required and nothing is written.
pub fn run_assignment_phase<S, R>(store: &mut S, router: &R, tx_id: &TxId) -> Result<Vec<UserId>>
where
    S: StateStore + ?Sized,
    R: RouteProvider + ?Sized,
{
    let users = snapshot_users(store)?;
    let (drivers, riders) = round_participants(&users);
    if drivers.is_empty() || riders.is_empty() {
        tracing::info!(%tx_id, "no matchable participants, skipping assignment");
        return Ok(Vec::new());
    }

    let matrix = load_matrix(store)?;
    let outcome = run_assignment(tx_id, &matrix, &drivers, &riders, router)?;

    let root = compute_mutation_root(&outcome.mutations);
    tracing::info!(
        %tx_id,
        mutations = outcome.mutations.len(),
        root = %mutation_root_hex(&root),
        "assignment computed"
    );

    let mut mutated = Vec::with_capacity(outcome.mutations.len());
    for record in &outcome.mutations {
        store.put(record.id.as_str(), to_canonical_json(record)?)?;
        mutated.push(record.id.clone());
    }
    Ok(mutated)
}
