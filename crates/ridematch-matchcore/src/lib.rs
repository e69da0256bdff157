//! # ridematch-matchcore
//!
//! **Pure deterministic matching engine for Ridematch.**
//!
//! Matchcore is the compute plane — it takes a snapshot of driver/rider
//! records plus an eligibility matrix and produces concrete pairings and
//! the resulting per-user mutations. It has:
//!
//! - **Zero side effects**: no ledger writes, no clocks, no ambient entropy
//! - **Deterministic output**: same snapshot + same transaction identity ->
//!   same result on every replica
//! - **Scarcity-first assignment**: riders with the fewest eligible drivers
//!   are satisfied before riders with many options
//! - **Hash-derived tie-breaking**: symmetric ties are resolved by a
//!   SHA-256 draw over the transaction identity, never by a random
//!   number generator

pub mod assignment;
pub mod determinism;
pub mod draw;
pub mod eligibility;

pub use assignment::{AssignmentOutcome, PlannedPickup, RoutePlan, run_assignment};
pub use determinism::{compute_mutation_root, mutation_root_hex, verify_mutation_root};
pub use draw::{draw, draw_index};
pub use eligibility::{build_eligibility, is_on_route};
