use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

pub type ProofId = u64;

#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct MessageProof {
    pub sender: AccountId,
    pub recipient: AccountId,
    pub content_hash: [u8; 32],
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub audit_digest: [u8; 32],
}

impl MessageProof {
    pub fn to_view(&self, id: ProofId) -> MessageProofView {
        MessageProofView {
            id,
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            content_hash: hex::encode(self.content_hash),
            timestamp: self.timestamp,
            audit_digest: hex::encode(self.audit_digest),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct MessageProofView {
    pub id: ProofId,
    pub sender: AccountId,
    pub recipient: AccountId,
    pub content_hash: String,
    pub timestamp: u64,
    pub audit_digest: String,
}
