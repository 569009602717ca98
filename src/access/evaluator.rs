//! Transaction admission policy.
//!
//! Decides whether a pending transaction may move value between its sender and
//! recipient, given both accounts' statuses in the WalletAccessControl contract
//! and their pool memberships in the PoolAccessControl contract.
//!
//! # Rules
//! Evaluated in order, the first match wins:
//! 1. Trusted sender, no recipient (contract creation): allow
//! 2. Both accounts trusted (whitelisted or unlisted): allow
//! 3. Either account blacklisted: deny
//! 4. Grey sender paying a system contract: allow
//! 5. Either account pool-grey: allow iff they share a pool
//! 6. Sender not sending-grey and recipient not receiving-grey: allow
//! 7. Otherwise: deny
//!
//! The order matters: a blacklisted sender never reaches the system-contract
//! exemption, and pool-grey accounts are settled before the coarser grey check.

use serde::Serialize;
use tracing::debug;

use super::pool::PoolStore;
use super::state::StateReader;
use super::status::{StatusStore, WalletStatus};
use super::tx::TransactionView;
use crate::config::AccessControlConfig;
use crate::types::Address;

/// The rule that decided a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    TrustedContractCreation,
    BothTrusted,
    Blacklisted,
    GreyToSystemAccount,
    PoolMembership,
    NotDirectionallyRestricted,
    DirectionallyRestricted,
}

/// Outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    allowed: bool,
    pub rule: DecisionRule,
    pub sender_status: WalletStatus,
    /// `None` for contract creations decided before the recipient was classified.
    pub recipient_status: Option<WalletStatus>,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}

/// Stateless evaluator bound to one set of control contracts.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    config: AccessControlConfig,
    system_accounts: [Address; 7],
}

impl PermissionEvaluator {
    pub fn new(config: AccessControlConfig) -> Self {
        let system_accounts = config.system_accounts();
        Self {
            config,
            system_accounts,
        }
    }

    pub fn config(&self) -> &AccessControlConfig {
        &self.config
    }

    /// Status accessor over `state`.
    pub fn status_store<'a, S: StateReader>(&'a self, state: &'a S) -> StatusStore<'a, S> {
        StatusStore::new(
            state,
            self.config.wallet_access_control,
            self.config.layout.wac_status_slot,
            &self.system_accounts,
        )
    }

    /// Pool accessor over `state`.
    pub fn pool_store<'a, S: StateReader>(&'a self, state: &'a S) -> PoolStore<'a, S> {
        PoolStore::new(
            state,
            self.config.pool_access_control,
            self.config.layout.pac_pool_list_slot,
            self.config.layout.max_pool_list_len,
        )
    }

    /// Returns `true` if `tx` sent by `sender` may be admitted against `state`.
    pub fn is_allowed<T, S>(&self, tx: &T, sender: &Address, state: &S) -> bool
    where
        T: TransactionView + ?Sized,
        S: StateReader,
    {
        self.evaluate(tx, sender, state).is_allowed()
    }

    /// Runs the admission rules and reports which one decided.
    pub fn evaluate<T, S>(&self, tx: &T, sender: &Address, state: &S) -> Verdict
    where
        T: TransactionView + ?Sized,
        S: StateReader,
    {
        let recipient = tx.recipient();
        let statuses = self.status_store(state);
        let sender_status = statuses.classify(sender);

        if sender_status.is_whitelisted_or_unlisted() && recipient.is_none() {
            return self.decide(
                sender,
                recipient,
                true,
                DecisionRule::TrustedContractCreation,
                sender_status,
                None,
            );
        }

        // A missing recipient past this point reads as an unlisted account that
        // is neither a system contract nor a pool member.
        let recipient_status = recipient
            .as_ref()
            .map_or(WalletStatus::Unlisted, |to| statuses.classify(to));

        let (allowed, rule) = if sender_status.is_whitelisted_or_unlisted()
            && recipient_status.is_whitelisted_or_unlisted()
        {
            (true, DecisionRule::BothTrusted)
        } else if sender_status.is_blacklisted() || recipient_status.is_blacklisted() {
            (false, DecisionRule::Blacklisted)
        } else if sender_status.is_grey()
            && recipient.as_ref().is_some_and(|to| statuses.is_system_account(to))
        {
            (true, DecisionRule::GreyToSystemAccount)
        } else if sender_status.is_pool_grey() || recipient_status.is_pool_grey() {
            let shared = recipient
                .as_ref()
                .is_some_and(|to| self.pool_store(state).share_pool(sender, to));
            (shared, DecisionRule::PoolMembership)
        } else if !sender_status.is_sending_grey() && !recipient_status.is_receiving_grey() {
            (true, DecisionRule::NotDirectionallyRestricted)
        } else {
            (false, DecisionRule::DirectionallyRestricted)
        };

        self.decide(
            sender,
            recipient,
            allowed,
            rule,
            sender_status,
            Some(recipient_status),
        )
    }

    fn decide(
        &self,
        sender: &Address,
        recipient: Option<Address>,
        allowed: bool,
        rule: DecisionRule,
        sender_status: WalletStatus,
        recipient_status: Option<WalletStatus>,
    ) -> Verdict {
        debug!(
            %sender,
            ?recipient,
            ?sender_status,
            ?recipient_status,
            ?rule,
            allowed,
            "transaction access evaluated"
        );
        Verdict {
            allowed,
            rule,
            sender_status,
            recipient_status,
        }
    }
}

impl Default for PermissionEvaluator {
    fn default() -> Self {
        Self::new(AccessControlConfig::default())
    }
}
