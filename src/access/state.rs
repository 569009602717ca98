//! Read-only view of contract storage.
//!
//! The host chain owns the state; the evaluator only ever asks for single
//! storage words. Uninitialized storage reads as zero, never as an error.

use std::collections::HashMap;

use tracing::trace;

use crate::types::{Address, StorageKey, StorageValue, B256};

/// Snapshot of contract storage that the evaluator reads from.
pub trait StateReader {
    /// Returns the word stored under `key` in `contract`, or zero if unset.
    fn storage(&self, contract: Address, key: StorageKey) -> StorageValue;
}

impl<T: StateReader + ?Sized> StateReader for &T {
    fn storage(&self, contract: Address, key: StorageKey) -> StorageValue {
        (**self).storage(contract, key)
    }
}

/// In-memory storage snapshot.
///
/// # Invariants
/// - Zero words are never stored; writing zero clears the entry.
#[derive(Debug, Default, Clone)]
pub struct InMemoryState {
    storage: HashMap<(Address, StorageKey), StorageValue>,
}

impl InMemoryState {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` under `key` in `contract`.
    pub fn set_storage(&mut self, contract: Address, key: StorageKey, value: StorageValue) {
        if value == B256::ZERO {
            self.storage.remove(&(contract, key));
        } else {
            self.storage.insert((contract, key), value);
        }
    }

    /// Number of non-zero words held.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no word is set.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl StateReader for InMemoryState {
    fn storage(&self, contract: Address, key: StorageKey) -> StorageValue {
        let value = self
            .storage
            .get(&(contract, key))
            .copied()
            .unwrap_or(B256::ZERO);
        trace!(%contract, %key, %value, "storage read");
        value
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_word_reads_as_zero() {
        let state = InMemoryState::new();
        assert_eq!(state.storage(Address::ZERO, B256::ZERO), B256::ZERO);
    }

    #[test]
    fn test_words_are_scoped_per_contract() {
        let mut state = InMemoryState::new();
        let key = B256::with_last_byte(1);
        state.set_storage(Address::with_last_byte(1), key, B256::with_last_byte(9));
        assert_eq!(state.storage(Address::with_last_byte(1), key), B256::with_last_byte(9));
        assert_eq!(state.storage(Address::with_last_byte(2), key), B256::ZERO);
    }

    #[test]
    fn test_writing_zero_clears_entry() {
        let mut state = InMemoryState::new();
        let key = B256::with_last_byte(1);
        state.set_storage(Address::ZERO, key, B256::with_last_byte(1));
        assert_eq!(state.len(), 1);
        state.set_storage(Address::ZERO, key, B256::ZERO);
        assert!(state.is_empty());
    }

    #[test]
    fn test_reader_works_through_reference() {
        fn read<S: StateReader>(state: S) -> StorageValue {
            state.storage(Address::ZERO, B256::ZERO)
        }
        let mut state = InMemoryState::new();
        state.set_storage(Address::ZERO, B256::ZERO, B256::with_last_byte(3));
        assert_eq!(read(&state), B256::with_last_byte(3));
    }
}
