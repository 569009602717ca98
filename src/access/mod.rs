//! Wallet access-control policy.
//!
//! Leaves first: [`layout`] resolves storage keys, [`array`] and [`status`]
//! read contract storage through [`state`], [`pool`] intersects pool lists, and
//! [`evaluator`] applies the admission rules.

pub mod array;
pub mod evaluator;
pub mod layout;
pub mod pool;
pub mod state;
pub mod status;
pub mod tx;
