//! Dynamic array reads.
//!
//! A `uint256[]` keeps its length word at its own storage key and its elements
//! contiguously from `keccak256(key)`. Only the first `len` elements are ever
//! read; words past the length are undefined as far as the contract is concerned.

use super::layout::{array_data_base, array_element_slot};
use super::state::StateReader;
use crate::types::{word_to_u256, Address, StorageKey, U256};

/// Location and length of a dynamic array in a contract's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicArray {
    /// Position of element 0.
    pub base: U256,
    /// Number of elements, saturated to `u64`.
    pub len: u64,
}

impl DynamicArray {
    /// Reads the length word at `length_slot` and derives the data base.
    pub fn locate<S: StateReader>(
        state: &S,
        contract: Address,
        length_slot: StorageKey,
    ) -> Self {
        let len = word_to_u256(state.storage(contract, length_slot)).saturating_to::<u64>();
        Self {
            base: array_data_base(length_slot),
            len,
        }
    }

    /// Returns `true` if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads element `index`. Callers keep `index < len`.
    pub fn get<S: StateReader>(&self, state: &S, contract: Address, index: u64) -> U256 {
        word_to_u256(state.storage(contract, array_element_slot(self.base, index)))
    }

    /// Lazily reads the elements in storage order.
    ///
    /// The length comes from contract storage and is not trusted to be small;
    /// nothing is allocated up front.
    pub fn iter<'s, S: StateReader + 's>(
        &self,
        state: &'s S,
        contract: Address,
    ) -> impl Iterator<Item = U256> + 's {
        let array = *self;
        (0..array.len).map(move |i| array.get(state, contract, i))
    }
}
