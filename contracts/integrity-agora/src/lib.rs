use crate::errors::IntegrityError;
use crate::state::IntegrityState;
use crate::types::{MessageProofView, ProofId};
use near_sdk::{env, near, AccountId, PanicOnDefault};

pub mod errors;
mod events;
pub mod state;
pub mod types;

/// Commit-and-verify store for message content hashes.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct IntegrityContract {
    state: IntegrityState,
}

#[near]
impl IntegrityContract {
    #[init]
    pub fn new() -> Self {
        Self {
            state: IntegrityState::new(),
        }
    }

    /// `content_hash` is the hex-encoded keccak-256 of the message content.
    #[handle_result]
    pub fn store_message_hash(
        &mut self,
        content_hash: String,
        recipient: AccountId,
    ) -> Result<ProofId, IntegrityError> {
        self.state
            .store_message_hash(&env::predecessor_account_id(), &content_hash, recipient)
    }

    pub fn verify(&self, proof_id: ProofId, content: String) -> bool {
        self.state.verify(proof_id, content.as_bytes())
    }

    pub fn get_proof(&self, proof_id: ProofId) -> Option<MessageProofView> {
        self.state.get_proof(proof_id)
    }

    pub fn get_version(&self) -> String {
        self.state.version.clone()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: IntegrityState::migrate(),
        }
    }
}
