//! Wallet classification.
//!
//! The WalletAccessControl contract stores one `uint256` status per account.
//! Codes 0..=5 have fixed meanings; any other positive code is kept as
//! [`WalletStatus::Unclassified`] so the decision rules can still see it.
//!
//! The predicates overlap on purpose (a blacklisted account is also grey);
//! the evaluator resolves overlaps by rule order.

use serde::Serialize;

use super::layout::address_mapping_slot;
use super::state::StateReader;
use crate::types::{word_to_u256, Address, U256};

/// Compliance status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "code", rename_all = "snake_case")]
pub enum WalletStatus {
    /// Code 0: never classified.
    Unlisted,
    /// Code 1: explicitly trusted. System accounts always classify here.
    Whitelisted,
    /// Code 2.
    Blacklisted,
    /// Code 3: may not send to ordinary accounts.
    SendingGrey,
    /// Code 4: may not receive from ordinary accounts.
    ReceivingGrey,
    /// Code 5: may only transact inside a shared pool.
    PoolGrey,
    /// Any other code. Not restricted by a dedicated rule.
    Unclassified(U256),
}

impl WalletStatus {
    /// Maps a raw status code to its category.
    pub fn from_code(code: U256) -> Self {
        if code > U256::from(5) {
            return WalletStatus::Unclassified(code);
        }
        match code.to::<u8>() {
            0 => WalletStatus::Unlisted,
            1 => WalletStatus::Whitelisted,
            2 => WalletStatus::Blacklisted,
            3 => WalletStatus::SendingGrey,
            4 => WalletStatus::ReceivingGrey,
            _ => WalletStatus::PoolGrey,
        }
    }

    /// The raw status code.
    pub fn code(&self) -> U256 {
        match self {
            WalletStatus::Unlisted => U256::ZERO,
            WalletStatus::Whitelisted => U256::from(1),
            WalletStatus::Blacklisted => U256::from(2),
            WalletStatus::SendingGrey => U256::from(3),
            WalletStatus::ReceivingGrey => U256::from(4),
            WalletStatus::PoolGrey => U256::from(5),
            WalletStatus::Unclassified(code) => *code,
        }
    }

    /// Code 0 or 1.
    pub fn is_whitelisted_or_unlisted(&self) -> bool {
        matches!(self, WalletStatus::Unlisted | WalletStatus::Whitelisted)
    }

    pub fn is_blacklisted(&self) -> bool {
        matches!(self, WalletStatus::Blacklisted)
    }

    /// Any code above 1, blacklisted included.
    pub fn is_grey(&self) -> bool {
        !self.is_whitelisted_or_unlisted()
    }

    pub fn is_sending_grey(&self) -> bool {
        matches!(self, WalletStatus::SendingGrey)
    }

    pub fn is_receiving_grey(&self) -> bool {
        matches!(self, WalletStatus::ReceivingGrey)
    }

    pub fn is_pool_grey(&self) -> bool {
        matches!(self, WalletStatus::PoolGrey)
    }
}

/// Typed accessor for the status mapping of the WalletAccessControl contract.
pub struct StatusStore<'a, S> {
    state: &'a S,
    contract: Address,
    slot: U256,
    system_accounts: &'a [Address],
}

impl<'a, S: StateReader> StatusStore<'a, S> {
    pub fn new(
        state: &'a S,
        contract: Address,
        slot: U256,
        system_accounts: &'a [Address],
    ) -> Self {
        Self {
            state,
            contract,
            slot,
            system_accounts,
        }
    }

    /// Returns `true` if `account` is one of the always-trusted system contracts.
    pub fn is_system_account(&self, account: &Address) -> bool {
        self.system_accounts.contains(account)
    }

    /// Raw status code of `account`. System accounts return 1 without a state read.
    pub fn status_code(&self, account: &Address) -> U256 {
        if self.is_system_account(account) {
            return U256::from(1);
        }
        let key = address_mapping_slot(self.slot, account);
        word_to_u256(self.state.storage(self.contract, key))
    }

    /// Status category of `account`.
    pub fn classify(&self, account: &Address) -> WalletStatus {
        WalletStatus::from_code(self.status_code(account))
    }
}
