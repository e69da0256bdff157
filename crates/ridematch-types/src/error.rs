//! Error types for the Ridematch engine.
//!
//! All errors use the `RM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input / user errors
//! - 2xx: Routing collaborator errors
//! - 3xx: Ledger state / matrix errors
//! - 9xx: General / internal errors
//!
//! Capacity exhaustion during the auction is deliberately **not** here: a
//! driver's seats hitting zero mid-loop is control flow (row clearing and a
//! retry), never a failure surfaced to the caller.

use thiserror::Error;

use crate::UserId;

/// Central error enum for all Ridematch operations.
#[derive(Debug, Error)]
pub enum RidematchError {
    // =================================================================
    // Input / User Errors (1xx)
    // =================================================================
    /// A request carried malformed coordinates or numeric fields.
    #[error("RM_ERR_100: Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The referenced user does not exist in the ledger.
    #[error("RM_ERR_101: Unknown user: {0}")]
    UnknownUser(UserId),

    /// A user with this ID already exists.
    #[error("RM_ERR_102: User already exists: {0}")]
    DuplicateUser(UserId),

    // =================================================================
    // Routing Errors (2xx)
    // =================================================================
    /// The routing collaborator failed; the current phase aborts with no
    /// partial writes.
    #[error("RM_ERR_200: Routing unavailable: {reason}")]
    RoutingUnavailable { reason: String },

    // =================================================================
    // Ledger State / Matrix Errors (3xx)
    // =================================================================
    /// Assignment was invoked before an eligibility matrix was persisted.
    #[error("RM_ERR_300: Eligibility matrix not found")]
    MatrixMissing,

    /// The persisted matrix does not match the current snapshot's filtered
    /// driver/rider counts — it is stale relative to the ledger.
    #[error(
        "RM_ERR_301: Matrix shape mismatch: matrix is {matrix_drivers}x{matrix_riders}, \
         snapshot has {snapshot_drivers} drivers and {snapshot_riders} riders"
    )]
    MatrixShapeMismatch {
        matrix_drivers: usize,
        matrix_riders: usize,
        snapshot_drivers: usize,
        snapshot_riders: usize,
    },

    /// Serialization / deserialization of ledger state failed.
    #[error("RM_ERR_302: Serialization error: {0}")]
    Serialization(String),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error (broken invariant).
    #[error("RM_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, RidematchError>;
