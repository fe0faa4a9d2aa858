use crate::errors::ProfileError;
use crate::state::ProfileDirectoryState;
use crate::types::Profile;
use near_sdk::{env, near, AccountId, PanicOnDefault, PublicKey};

pub mod errors;
mod events;
pub mod state;
pub mod types;

/// Username and public-key directory with an online/offline flag per account.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct ProfileDirectory {
    state: ProfileDirectoryState,
}

#[near]
impl ProfileDirectory {
    #[init]
    pub fn new() -> Self {
        Self {
            state: ProfileDirectoryState::new(),
        }
    }

    #[handle_result]
    pub fn register(&mut self, username: String, public_key: PublicKey) -> Result<(), ProfileError> {
        self.state
            .register(&env::predecessor_account_id(), username, public_key)
    }

    #[handle_result]
    pub fn set_online_status(&mut self, online: bool) -> Result<(), ProfileError> {
        self.state
            .set_online_status(&env::predecessor_account_id(), online)
    }

    pub fn get_profile(&self, account_id: AccountId) -> Option<Profile> {
        self.state.get_profile(&account_id)
    }

    pub fn get_account_by_username(&self, username: String) -> Option<AccountId> {
        self.state.get_account_by_username(&username)
    }

    pub fn is_registered(&self, account_id: AccountId) -> bool {
        self.state.is_registered(&account_id)
    }

    pub fn get_version(&self) -> String {
        self.state.version.clone()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: ProfileDirectoryState::migrate(),
        }
    }
}
