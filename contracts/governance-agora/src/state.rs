use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::{env, log, AccountId, BorshStorageKey};
use semver::Version;

use crate::events::GovernanceEvent;
use crate::governance::ProposalBook;
use crate::groups::GroupStore;
use crate::types::GroupId;

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Groups,
    Members,
    MemberSet { group_id: GroupId },
    Admins,
    AdminSet { group_id: GroupId },
    UserGroups,
    UserGroupSet { account_id: AccountId },
    Proposals,
    Ballots,
    GroupProposals,
    GroupProposalList { group_id: GroupId },
}

/// Process-wide state: the two repositories every entry point works against.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct GovernanceState {
    pub version: String,
    pub groups: GroupStore,
    pub proposals: ProposalBook,
}

impl GovernanceState {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            groups: GroupStore::new(),
            proposals: ProposalBook::new(),
        }
    }

    pub fn migrate() -> Self {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
        let current_version = Version::parse(CURRENT_VERSION)
            .unwrap_or_else(|_| env::panic_str("Invalid current version in Cargo.toml"));

        // Raw bytes of the single-field contract struct, which encode as the state itself.
        let state_bytes = env::storage_read(b"STATE")
            .unwrap_or_else(|| env::panic_str("No contract state to migrate"));
        let mut state = borsh::from_slice::<GovernanceState>(&state_bytes)
            .unwrap_or_else(|_| env::panic_str("No readable governance state to migrate"));

        match Version::parse(&state.version) {
            Ok(stored) if stored >= current_version => {
                env::log_str("State is at current or newer version, no migration needed");
            }
            _ => {
                log!("Migrating from state version {}", state.version);
                let old_version =
                    std::mem::replace(&mut state.version, CURRENT_VERSION.to_string());
                GovernanceEvent::StateMigrated {
                    old_version,
                    new_version: CURRENT_VERSION.to_string(),
                }
                .emit();
            }
        }
        state
    }
}

impl Default for GovernanceState {
    fn default() -> Self {
        Self::new()
    }
}
