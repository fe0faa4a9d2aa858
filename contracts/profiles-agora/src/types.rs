use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{AccountId, PublicKey};
use near_sdk_macros::NearSchema;

pub const MAX_USERNAME_LENGTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[borsh(crate = "near_sdk::borsh")]
#[abi(json, borsh)]
pub struct Profile {
    pub account_id: AccountId,
    pub username: String,
    pub public_key: PublicKey,
    pub is_online: bool,
    /// Seconds since the Unix epoch.
    pub last_seen: u64,
}
