use near_sdk::{near, AccountId};

use crate::types::ProofId;

#[near(event_json(standard = "nep297"))]
pub enum IntegrityEvent {
    #[event_version("1.0.0")]
    MessageHashStored {
        proof_id: ProofId,
        sender: AccountId,
        recipient: AccountId,
        content_hash: String,
        timestamp: u64,
    },
    #[event_version("1.0.0")]
    StateMigrated { old_version: String, new_version: String },
}
