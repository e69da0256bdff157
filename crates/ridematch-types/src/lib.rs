//! # ridematch-types
//!
//! Shared types, errors, and configuration for the **Ridematch** engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`TxId`]
//! - **Geography**: [`GeoPoint`]
//! - **User model**: [`UserRecord`], [`Role`], [`MatchedRider`], [`DriverRef`]
//! - **Matrix**: [`EligibilityMatrix`]
//! - **Configuration**: [`RoutingConfig`]
//! - **Errors**: [`RidematchError`] with `RM_ERR_` prefix codes
//! - **Constants**: token economics, draw seeds, ledger keys

pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod ids;
pub mod matrix;
pub mod user;

// Re-export all primary types at crate root for ergonomic imports:
//   use ridematch_types::{UserRecord, EligibilityMatrix, ...};

pub use config::*;
pub use error::*;
pub use geo::*;
pub use ids::*;
pub use matrix::*;
pub use user::*;

// Constants are accessed via `ridematch_types::constants::FOO`
// (not re-exported to avoid name collisions).
