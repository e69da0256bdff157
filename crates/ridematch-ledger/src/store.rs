//! The ledger key/value collaborator contract, and an in-memory
//! implementation for tests and embedding.

use std::collections::BTreeMap;

use ridematch_types::Result;

/// Synchronous ledger state accessor.
///
/// `put` is assumed durable by the time the enclosing logical operation
/// commits; atomicity across multiple `put` calls is the transaction
/// boundary's responsibility, not this trait's.
pub trait StateStore {
    /// Fetch the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, overwriting any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Every (key, value) pair in the store. **Unordered** by contract —
    /// callers needing replica-stable iteration must sort the result.
    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>>;
}

/// `BTreeMap`-backed [`StateStore`] reference implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<(String, Vec<u8>)>> {
        Ok(self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
