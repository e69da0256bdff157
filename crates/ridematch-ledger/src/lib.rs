//! # ridematch-ledger
//!
//! **State plane**: everything that touches the transactional ledger.
//!
//! ## Architecture
//!
//! The state plane sits between the ledger's key/value store and the pure
//! compute plane:
//! 1. **StateStore**: the collaborator contract (get/put/unordered scan)
//! 2. **Registry**: user registration, ride configuration, reads, counts
//! 3. **Canonical encoding**: alphabetically keyed JSON so replicas write
//!    byte-identical state
//! 4. **Matrix store**: the round's eligibility matrix under a well-known key
//! 5. **Phases**: the two externally triggerable operations — matrix
//!    construction and assignment — each snapshot -> compute -> persist
//!
//! ## Round Flow
//!
//! ```text
//! registry::create_user / configure_ride
//!     -> phases::run_matrix_phase   (persist matrix, atomically)
//!     -> phases::run_assignment_phase (persist mutated users, atomically)
//! ```
//!
//! The caller sequences the second phase strictly after the first phase's
//! writes are durable; neither phase retries nor partially persists.

pub mod canonical;
pub mod matrix_store;
pub mod phases;
pub mod registry;
pub mod store;

pub use canonical::to_canonical_json;
pub use matrix_store::{load_matrix, save_matrix};
pub use phases::{run_assignment_phase, run_matrix_phase};
pub use store::{MemoryStore, StateStore};
