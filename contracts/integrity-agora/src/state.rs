use crate::errors::IntegrityError;
use crate::events::IntegrityEvent;
use crate::types::{MessageProof, MessageProofView, ProofId};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::store::LookupMap;
use near_sdk::{env, log, AccountId, BorshStorageKey};
use semver::Version;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Proofs,
}

#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct IntegrityState {
    pub version: String,
    pub next_proof_id: ProofId,
    pub proofs: LookupMap<ProofId, MessageProof>,
}

impl IntegrityState {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            next_proof_id: 1,
            proofs: LookupMap::new(StorageKey::Proofs),
        }
    }

    /// Proof ids come from a sequence, so repeated sends within one second
    /// never collide. The digest binds sender, recipient and time to the id.
    pub fn store_message_hash(
        &mut self,
        sender: &AccountId,
        content_hash_hex: &str,
        recipient: AccountId,
    ) -> Result<ProofId, IntegrityError> {
        let content_hash: [u8; 32] = hex::decode(content_hash_hex)
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(IntegrityError::InvalidHash)?;

        let proof_id = self.next_proof_id;
        self.next_proof_id += 1;
        let timestamp = env::block_timestamp() / NANOS_PER_SECOND;

        let preimage = borsh::to_vec(&(sender, &recipient, timestamp, proof_id))
            .unwrap_or_else(|_| env::panic_str("Failed to encode proof digest"));
        let audit_digest = env::keccak256_array(&preimage);

        self.proofs.insert(
            proof_id,
            MessageProof {
                sender: sender.clone(),
                recipient: recipient.clone(),
                content_hash,
                timestamp,
                audit_digest,
            },
        );

        log!("Proof {} stored by {} for {}", proof_id, sender, recipient);
        IntegrityEvent::MessageHashStored {
            proof_id,
            sender: sender.clone(),
            recipient,
            content_hash: hex::encode(content_hash),
            timestamp,
        }
        .emit();
        Ok(proof_id)
    }

    /// Unknown proofs verify as false.
    pub fn verify(&self, proof_id: ProofId, content: &[u8]) -> bool {
        self.proofs
            .get(&proof_id)
            .is_some_and(|proof| proof.content_hash == env::keccak256_array(content))
    }

    pub fn get_proof(&self, proof_id: ProofId) -> Option<MessageProofView> {
        self.proofs.get(&proof_id).map(|proof| proof.to_view(proof_id))
    }

    pub fn migrate() -> Self {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
        let current_version = Version::parse(CURRENT_VERSION)
            .unwrap_or_else(|_| env::panic_str("Invalid current version in Cargo.toml"));

        // Raw bytes of the single-field contract struct, which encode as the state itself.
        let state_bytes = env::storage_read(b"STATE")
            .unwrap_or_else(|| env::panic_str("No contract state to migrate"));
        let mut state = borsh::from_slice::<IntegrityState>(&state_bytes)
            .unwrap_or_else(|_| env::panic_str("No readable integrity state to migrate"));

        match Version::parse(&state.version) {
            Ok(stored) if stored >= current_version => {
                env::log_str("State is at current or newer version, no migration needed");
            }
            _ => {
                let old_version =
                    std::mem::replace(&mut state.version, CURRENT_VERSION.to_string());
                IntegrityEvent::StateMigrated {
                    old_version,
                    new_version: CURRENT_VERSION.to_string(),
                }
                .emit();
            }
        }
        state
    }
}

impl Default for IntegrityState {
    fn default() -> Self {
        Self::new()
    }
}
