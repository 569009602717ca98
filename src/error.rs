//! Configuration errors.
//!
//! Evaluating a transaction never fails: every read of contract storage yields a
//! word, so the only fallible surface is loading and validating the contract
//! addresses and storage layout the evaluator is built from.

use thiserror::Error;

use crate::types::Address;

/// Errors raised while loading or validating an
/// [`AccessControlConfig`](crate::config::AccessControlConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid access-control config: {0}")]
    Json(#[from] serde_json::Error),
    /// The storage layout version is not one this evaluator understands.
    #[error("unsupported storage layout version {found}, expected {expected}")]
    UnsupportedLayoutVersion { found: u32, expected: u32 },
    /// The same address was assigned to two control contracts.
    #[error("address {address} is assigned to both {first} and {second}")]
    DuplicateSystemAccount {
        address: Address,
        first: &'static str,
        second: &'static str,
    },
}
