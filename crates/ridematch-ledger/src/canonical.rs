//! Canonical JSON encoding for ledger writes.
//!
//! Independent replicas must produce byte-identical state for the same
//! logical write, so every persisted value goes through a canonical form:
//! the value is first lifted into `serde_json::Value`, whose object maps
//! are `BTreeMap`-backed and therefore alphabetically keyed at every level,
//! then serialized compactly.

use ridematch_types::{Result, RidematchError};
use serde::Serialize;

/// Serialize `value` with recursively sorted object keys.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let tree = serde_json::to_value(value)
        .map_err(|err| RidematchError::Serialization(err.to_string()))?;
    serde_json::to_vec(&tree).map_err(|err| RidematchError::Serialization(err.to_string()))
}
