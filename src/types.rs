//! Word types shared by the storage readers and the policy.
//!
//! Control-contract storage is addressed by 32-byte keys and holds 32-byte words.
//! Keys and raw words are `B256`; status codes and pool identifiers are the same
//! words read as `U256`.

pub use alloy_primitives::{keccak256, Address, B256, U256};

/// Raw 32-byte value read from contract storage.
pub type Word = B256;

/// Key into a contract's storage, as produced by the layout functions.
pub type StorageKey = B256;
pub type StorageValue = B256;

// Pool identifiers are stored as raw uint256 array elements in the pool contract.
pub type PoolId = U256;

/// Interprets a raw storage word as a big-endian unsigned integer.
pub fn word_to_u256(word: Word) -> U256 {
    U256::from_be_bytes(word.0)
}

/// Encodes an unsigned integer as a big-endian storage word.
pub fn u256_to_word(value: U256) -> Word {
    B256::from(value.to_be_bytes::<32>())
}
