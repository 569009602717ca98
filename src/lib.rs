//! Access-control admission for a permissioned EVM ledger.
//!
//! Given a pending transaction, its recovered sender and a snapshot of contract
//! storage, decides whether the transfer is permitted. Account statuses and pool
//! memberships live in two control contracts and are read straight from their
//! storage using the Solidity layout convention.
//!
//! ```ignore
//! use wallet_access_control::{PermissionEvaluator, AccessControlConfig, PendingTransaction};
//!
//! let evaluator = PermissionEvaluator::new(AccessControlConfig::default());
//! if evaluator.is_allowed(&tx, &sender, &state) {
//!     /* admit */
//! }
//! ```

pub mod access;
pub mod config;
pub mod error;
pub mod types;

pub use access::evaluator::{DecisionRule, PermissionEvaluator, Verdict};
pub use access::pool::PoolStore;
pub use access::state::{InMemoryState, StateReader};
pub use access::status::{StatusStore, WalletStatus};
pub use access::tx::{PendingTransaction, TransactionView};
pub use config::{AccessControlConfig, StorageLayout};
pub use error::ConfigError;
