//! Control-contract configuration.
//!
//! The evaluator reads raw storage of two deployed contracts: the wallet access
//! control contract (WAC) holding `mapping(address => uint256) status`, and the
//! pool access control contract (PAC) holding `mapping(address => uint256[]) pools`.
//! The addresses and slot numbers below must match the deployed bytecode; a layout
//! change on either side needs a new [`StorageLayout::version`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Address, U256};

/// The only storage layout revision this crate knows how to read.
pub const CURRENT_LAYOUT_VERSION: u32 = 1;

/// Slot of `status` in the WalletAccessControl contract.
pub const WAC_STATUS_SLOT: U256 = U256::from_limbs([6, 0, 0, 0]);
/// Slot of `pools` in the PoolAccessControl contract.
pub const PAC_POOL_LIST_SLOT: U256 = U256::from_limbs([1, 0, 0, 0]);
/// Longest pool list the evaluator will scan. Longer lists share no pool.
pub const MAX_POOL_LIST_LEN: u64 = 256;

fn default_max_pool_list_len() -> u64 {
    MAX_POOL_LIST_LEN
}

/// Storage layout of the control contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    /// Layout revision, bumped whenever a slot below moves.
    pub version: u32,
    /// Slot of the account status mapping in the WAC contract.
    pub wac_status_slot: U256,
    /// Slot of the account pool-list mapping in the PAC contract.
    pub pac_pool_list_slot: U256,
    /// Pool lists whose length word exceeds this are treated as corrupt and
    /// never share a pool, which keeps every evaluation bounded.
    #[serde(default = "default_max_pool_list_len")]
    pub max_pool_list_len: u64,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            version: CURRENT_LAYOUT_VERSION,
            wac_status_slot: WAC_STATUS_SLOT,
            pac_pool_list_slot: PAC_POOL_LIST_SLOT,
            max_pool_list_len: MAX_POOL_LIST_LEN,
        }
    }
}

/// Addresses of the system contracts plus the storage layout used to read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlConfig {
    // =========================================================================
    // System contracts
    // =========================================================================
    pub owner: Address,
    /// WalletAccessControl contract, holds account statuses.
    pub wallet_access_control: Address,
    /// PoolAccessControl contract, holds pool memberships.
    pub pool_access_control: Address,
    pub token: Address,
    pub main_faucet: Address,
    pub waqf: Address,
    pub zakat: Address,

    // =========================================================================
    // Layout
    // =========================================================================
    #[serde(default)]
    pub layout: StorageLayout,
}

impl Default for AccessControlConfig {
    fn default() -> Self {
        Self {
            owner: Address::with_last_byte(0x10),
            wallet_access_control: Address::with_last_byte(0x20),
            pool_access_control: Address::with_last_byte(0x30),
            token: Address::with_last_byte(0x40),
            main_faucet: Address::with_last_byte(0x50),
            waqf: Address::with_last_byte(0x60),
            zakat: Address::with_last_byte(0x70),
            layout: StorageLayout::default(),
        }
    }
}

impl AccessControlConfig {
    /// Parses a JSON document and validates it.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the layout version and that every system contract has its own address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.version != CURRENT_LAYOUT_VERSION {
            return Err(ConfigError::UnsupportedLayoutVersion {
                found: self.layout.version,
                expected: CURRENT_LAYOUT_VERSION,
            });
        }

        let named = self.named_system_accounts();
        for (i, (first, a)) in named.iter().enumerate() {
            if let Some((second, _)) = named[i + 1..].iter().find(|(_, b)| a == b) {
                return Err(ConfigError::DuplicateSystemAccount {
                    address: *a,
                    first: *first,
                    second: *second,
                });
            }
        }
        Ok(())
    }

    /// The always-trusted system accounts.
    pub fn system_accounts(&self) -> [Address; 7] {
        self.named_system_accounts().map(|(_, address)| address)
    }

    fn named_system_accounts(&self) -> [(&'static str, Address); 7] {
        [
            ("owner", self.owner),
            ("wallet_access_control", self.wallet_access_control),
            ("pool_access_control", self.pool_access_control),
            ("token", self.token),
            ("main_faucet", self.main_faucet),
            ("waqf", self.waqf),
            ("zakat", self.zakat),
        ]
    }
}
