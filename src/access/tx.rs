//! Transaction view used by the evaluator.

use serde::{Deserialize, Serialize};

use crate::types::{Address, U256};

/// The parts of a pending transaction the access policy looks at.
///
/// The sender is not part of the view: the host recovers it from the signature.
pub trait TransactionView {
    /// Destination account, or `None` for a contract creation.
    fn recipient(&self) -> Option<Address>;
}

/// Minimal decoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub recipient: Option<Address>,
    pub value: U256,
}

impl PendingTransaction {
    /// A value transfer to `recipient`.
    pub fn transfer(recipient: Address, value: U256) -> Self {
        Self {
            recipient: Some(recipient),
            value,
        }
    }

    /// A contract deployment.
    pub fn create(value: U256) -> Self {
        Self {
            recipient: None,
            value,
        }
    }
}

impl TransactionView for PendingTransaction {
    fn recipient(&self) -> Option<Address> {
        self.recipient
    }
}

impl<T: TransactionView + ?Sized> TransactionView for &T {
    fn recipient(&self) -> Option<Address> {
        (**self).recipient()
    }
}
