//! Storage address resolution.
//!
//! Reproduces the Solidity storage layout for mappings and dynamic arrays:
//! - `mapping[key]` at slot `p` lives at `keccak256(pad32(key) ++ pad32(p))`
//! - a dynamic array at slot `p` keeps its length at `p` and element `i` at
//!   `keccak256(p) + i`
//!
//! These functions must stay bit-exact with the host VM, otherwise every lookup
//! silently reads an empty word.
//!
//! # References
//! - [Solidity docs, Layout of State Variables in Storage: Mappings and Dynamic Arrays]

use crate::types::{keccak256, u256_to_word, word_to_u256, Address, StorageKey, U256};

/// Left-pads `bytes` to a 32-byte word. Longer inputs keep their trailing 32 bytes.
fn pad32(bytes: &[u8]) -> [u8; 32] {
    let mut word = [0u8; 32];
    let take = bytes.len().min(32);
    word[32 - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    word
}

/// Computes the storage key of `mapping[key]` for a mapping declared at `slot`.
pub fn mapping_slot(slot: U256, key: impl AsRef<[u8]>) -> StorageKey {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(&pad32(key.as_ref()));
    preimage[32..].copy_from_slice(&slot.to_be_bytes::<32>());
    keccak256(preimage)
}

/// Storage key of `mapping[account]` for an address-keyed mapping at `slot`.
pub fn address_mapping_slot(slot: U256, account: &Address) -> StorageKey {
    mapping_slot(slot, account.as_slice())
}

/// Position of element 0 of the dynamic array whose length word sits at `length_slot`.
pub fn array_data_base(length_slot: StorageKey) -> U256 {
    word_to_u256(keccak256(length_slot))
}

/// Storage key of element `index` of an array starting at `base`, wrapping modulo 2^256.
pub fn array_element_slot(base: U256, index: u64) -> StorageKey {
    u256_to_word(base.wrapping_add(U256::from(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::B256;
    use proptest::prelude::*;

    fn word(hex_str: &str) -> B256 {
        B256::from_slice(&hex::decode(hex_str).unwrap())
    }

    /// Known keccak vectors from the Solidity layout convention.
    mod vectors {
        use super::*;

        #[test]
        fn test_mapping_slot_of_zero_key_at_slot_zero() {
            assert_eq!(
                mapping_slot(U256::ZERO, Address::ZERO.as_slice()),
                word("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5")
            );
        }

        #[test]
        fn test_array_base_of_slot_zero() {
            assert_eq!(
                u256_to_word(array_data_base(B256::ZERO)),
                word("290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563")
            );
        }

        #[test]
        fn test_array_base_of_slot_one() {
            let slot_one = u256_to_word(U256::from(1));
            assert_eq!(
                u256_to_word(array_data_base(slot_one)),
                word("b10e2d527612073b26eecdfd717e6a320cf44b4afac2b0732d9fcbe2b7fa0cf6")
            );
        }
    }

    mod padding {
        use super::*;

        #[test]
        fn test_address_key_is_left_padded() {
            let account = Address::with_last_byte(0x42);
            let mut preimage = [0u8; 64];
            preimage[12..32].copy_from_slice(account.as_slice());
            preimage[63] = 6;
            assert_eq!(address_mapping_slot(U256::from(6), &account), keccak256(preimage));
        }

        #[test]
        fn test_short_and_padded_keys_agree() {
            let slot = U256::from(3);
            let mut padded = [0u8; 32];
            padded[31] = 0x01;
            assert_eq!(mapping_slot(slot, [0x01u8]), mapping_slot(slot, padded));
        }

        #[test]
        fn test_long_key_keeps_trailing_bytes() {
            let mut long = vec![0xffu8; 8];
            long.extend_from_slice(&[0x11; 32]);
            assert_eq!(mapping_slot(U256::ZERO, &long), mapping_slot(U256::ZERO, [0x11u8; 32]));
        }
    }

    mod arrays {
        use super::*;

        #[test]
        fn test_element_slots_are_contiguous() {
            let base = array_data_base(B256::ZERO);
            assert_eq!(array_element_slot(base, 0), u256_to_word(base));
            assert_eq!(array_element_slot(base, 2), u256_to_word(base + U256::from(2)));
        }

        #[test]
        fn test_element_slot_wraps_at_word_boundary() {
            assert_eq!(array_element_slot(U256::MAX, 1), B256::ZERO);
        }
    }

    proptest! {
        #[test]
        fn mapping_slot_is_deterministic(slot in any::<u64>(), key in any::<[u8; 20]>()) {
            let account = Address::from(key);
            prop_assert_eq!(
                address_mapping_slot(U256::from(slot), &account),
                address_mapping_slot(U256::from(slot), &account)
            );
        }

        #[test]
        fn distinct_inputs_resolve_to_distinct_slots(
            a in any::<(u64, [u8; 20])>(),
            b in any::<(u64, [u8; 20])>(),
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(
                address_mapping_slot(U256::from(a.0), &Address::from(a.1)),
                address_mapping_slot(U256::from(b.0), &Address::from(b.1))
            );
        }
    }
}
