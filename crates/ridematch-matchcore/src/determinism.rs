//! Cross-replica verification of assignment output.
//!
//! Every replica executing the same transaction must produce the exact same
//! mutation set. The mutation root is a SHA-256 digest over the ordered
//! mutations that lets replicas compare results without exchanging full
//! payloads. Floating-point fields are hashed via their IEEE-754 bit
//! patterns, so the digest is exact rather than format-dependent.

use ridematch_types::{GeoPoint, Role, UserRecord};
use sha2::{Digest, Sha256};

fn update_point(hasher: &mut Sha256, point: GeoPoint) {
    hasher.update(point.lat.to_bits().to_le_bytes());
    hasher.update(point.lng.to_bits().to_le_bytes());
}

/// Compute the mutation root over an ordered mutation set.
///
/// The digest commits to every field the assignment engine writes: identity,
/// role, balances, seats, paths, match references, and the assigned flag.
#[must_use]
pub fn compute_mutation_root(mutations: &[UserRecord]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"ridematch:mutation_root:v1:");
    hasher.update((mutations.len() as u64).to_le_bytes());

    for record in mutations {
        hasher.update((record.id.as_str().len() as u64).to_le_bytes());
        hasher.update(record.id.as_str().as_bytes());
        hasher.update(match record.role {
            None => [0u8],
            Some(Role::Driver) => [1u8],
            Some(Role::Rider) => [2u8],
        });
        update_point(&mut hasher, record.source);
        update_point(&mut hasher, record.destination);
        hasher.update(record.token.to_le_bytes());
        hasher.update(u64::from(record.seats).to_le_bytes());
        hasher.update(u64::from(record.threshold).to_le_bytes());
        hasher.update(record.radius.to_bits().to_le_bytes());

        hasher.update((record.path.len() as u64).to_le_bytes());
        for &point in &record.path {
            update_point(&mut hasher, point);
        }

        hasher.update((record.riders.len() as u64).to_le_bytes());
        for matched in &record.riders {
            hasher.update((matched.id.as_str().len() as u64).to_le_bytes());
            hasher.update(matched.id.as_str().as_bytes());
            update_point(&mut hasher, matched.boarding);
            update_point(&mut hasher, matched.alighting);
        }

        match &record.driver {
            None => hasher.update([0u8]),
            Some(driver_ref) => {
                hasher.update([1u8]);
                hasher.update((driver_ref.id.as_str().len() as u64).to_le_bytes());
                hasher.update(driver_ref.id.as_str().as_bytes());
                update_point(&mut hasher, driver_ref.boarding);
                update_point(&mut hasher, driver_ref.alighting);
            }
        }
        hasher.update([u8::from(record.assigned)]);
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Recompute the root from the mutations and compare with the expected one.
#[must_use]
pub fn verify_mutation_root(mutations: &[UserRecord], expected_root: &[u8; 32]) -> bool {
    compute_mutation_root(mutations) == *expected_root
}

/// Hex rendition of a mutation root, for logs and digest exchange.
#[must_use]
pub fn mutation_root_hex(root: &[u8; 32]) -> String {
    hex::encode(root)
}
