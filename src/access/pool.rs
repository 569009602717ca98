//! Pool membership.
//!
//! The PoolAccessControl contract stores `mapping(address => uint256[])` of
//! pool identifiers per account. Two accounts share a pool when their lists
//! intersect. Lists are small and bounded by governance, so the intersection is
//! a nested scan over storage rather than a set build. A list whose length word
//! exceeds the configured maximum is treated as corrupt: it shares no pool and
//! none of its elements are read.

use tracing::warn;

use super::array::DynamicArray;
use super::layout::address_mapping_slot;
use super::state::StateReader;
use crate::types::{Address, PoolId, U256};

/// Typed accessor for the pool-list mapping of the PoolAccessControl contract.
pub struct PoolStore<'a, S> {
    state: &'a S,
    contract: Address,
    slot: U256,
    max_list_len: u64,
}

impl<'a, S: StateReader> PoolStore<'a, S> {
    pub fn new(state: &'a S, contract: Address, slot: U256, max_list_len: u64) -> Self {
        Self {
            state,
            contract,
            slot,
            max_list_len,
        }
    }

    /// Locates the pool list of `account`: data base and number of pools.
    pub fn pool_count(&self, account: &Address) -> DynamicArray {
        let length_slot = address_mapping_slot(self.slot, account);
        DynamicArray::locate(self.state, self.contract, length_slot)
    }

    /// Reads the pool identifiers of a located list, in storage order.
    /// Over-long lists read as empty.
    pub fn pool_list(&self, list: &DynamicArray) -> Vec<PoolId> {
        if !self.is_readable(list) {
            return Vec::new();
        }
        list.iter(self.state, self.contract).collect()
    }

    /// All pools `account` belongs to.
    pub fn pools_of(&self, account: &Address) -> Vec<PoolId> {
        self.pool_list(&self.pool_count(account))
    }

    /// Returns `true` if `a` and `b` are members of at least one common pool.
    ///
    /// An account without pools, or with an over-long list, never shares one;
    /// in that case no list element is read for either account.
    pub fn share_pool(&self, a: &Address, b: &Address) -> bool {
        let list_a = self.pool_count(a);
        if !self.is_readable(&list_a) {
            return false;
        }
        let list_b = self.pool_count(b);
        if !self.is_readable(&list_b) {
            return false;
        }

        list_a
            .iter(self.state, self.contract)
            .any(|pool| list_b.iter(self.state, self.contract).any(|other| other == pool))
    }

    fn is_readable(&self, list: &DynamicArray) -> bool {
        if list.len > self.max_list_len {
            warn!(
                contract = %self.contract,
                len = list.len,
                max = self.max_list_len,
                "pool list longer than allowed, treating as no pools"
            );
            return false;
        }
        !list.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::access::layout::{array_data_base, array_element_slot};
    use crate::access::state::InMemoryState;
    use crate::types::u256_to_word;

    /// Writes `pools` as the pool list of `account`, the way the contract lays it out.
    pub(crate) fn set_pools(
        state: &mut InMemoryState,
        contract: Address,
        slot: U256,
        account: Address,
        pools: &[u64],
    ) {
        let length_slot = address_mapping_slot(slot, &account);
        state.set_storage(contract, length_slot, u256_to_word(U256::from(pools.len())));
        let base = array_data_base(length_slot);
        for (i, pool) in pools.iter().enumerate() {
            state.set_storage(
                contract,
                array_element_slot(base, i as u64),
                u256_to_word(U256::from(*pool)),
            );
        }
    }
}
