//! Eligibility-matrix persistence.
//!
//! The matrix is an explicit round-scoped entity stored wholesale under
//! [`MATRIX_STATE_KEY`] and recomputed each round — never incrementally
//! updated.

use ridematch_types::{
    EligibilityMatrix, Result, RidematchError, constants::MATRIX_STATE_KEY,
};

use crate::{canonical::to_canonical_json, store::StateStore};

/// Persist the round's matrix, replacing any previous one.
pub fn save_matrix<S>(store: &mut S, matrix: &EligibilityMatrix) -> Result<()>
where
    S: StateStore + ?Sized,
{
    store.put(MATRIX_STATE_KEY, to_canonical_json(matrix)?)
}

/// Load the persisted matrix; absence means the matrix phase has not run.
pub fn load_matrix<S>(store: &S) -> Result<EligibilityMatrix>
where
    S: StateStore + ?Sized,
{
    let Some(bytes) = store.get(MATRIX_STATE_KEY)? else {
        return Err(RidematchError::MatrixMissing);
    };
    serde_json::from_slice(&bytes).map_err(|err| RidematchError::Serialization(err.to_string()))
}
