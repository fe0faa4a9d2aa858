use crate::errors::ProfileError;
use crate::events::ProfileEvent;
use crate::types::{Profile, MAX_USERNAME_LENGTH};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::store::LookupMap;
use near_sdk::{env, log, AccountId, BorshStorageKey, PublicKey};
use semver::Version;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Profiles,
    Usernames,
}

#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct ProfileDirectoryState {
    pub version: String,
    pub profiles: LookupMap<AccountId, Profile>,
    pub usernames: LookupMap<String, AccountId>,
}

impl ProfileDirectoryState {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            profiles: LookupMap::new(StorageKey::Profiles),
            usernames: LookupMap::new(StorageKey::Usernames),
        }
    }

    /// Replaces the caller's profile wholesale. The username mapping is
    /// last-write-wins; an earlier username of the same account is left in place.
    pub fn register(
        &mut self,
        account_id: &AccountId,
        username: String,
        public_key: PublicKey,
    ) -> Result<(), ProfileError> {
        let length = username.chars().count();
        if length == 0 || length > MAX_USERNAME_LENGTH {
            return Err(ProfileError::InvalidUsername);
        }

        let profile = Profile {
            account_id: account_id.clone(),
            username: username.clone(),
            public_key: public_key.clone(),
            is_online: true,
            last_seen: env::block_timestamp() / NANOS_PER_SECOND,
        };
        if let Some(previous) = self.usernames.get(&username) {
            if previous != account_id {
                log!("Username {} moves from {} to {}", username, previous, account_id);
            }
        }
        self.profiles.insert(account_id.clone(), profile);
        self.usernames.insert(username.clone(), account_id.clone());

        ProfileEvent::ProfileRegistered {
            account_id: account_id.clone(),
            username,
            public_key: String::from(&public_key),
        }
        .emit();
        Ok(())
    }

    pub fn set_online_status(
        &mut self,
        account_id: &AccountId,
        online: bool,
    ) -> Result<(), ProfileError> {
        let profile = self
            .profiles
            .get_mut(account_id)
            .ok_or(ProfileError::ProfileNotFound)?;
        profile.is_online = online;
        profile.last_seen = env::block_timestamp() / NANOS_PER_SECOND;

        ProfileEvent::StatusChanged {
            account_id: account_id.clone(),
            is_online: online,
            last_seen: profile.last_seen,
        }
        .emit();
        Ok(())
    }

    pub fn get_profile(&self, account_id: &AccountId) -> Option<Profile> {
        self.profiles.get(account_id).cloned()
    }

    pub fn get_account_by_username(&self, username: &str) -> Option<AccountId> {
        self.usernames.get(username).cloned()
    }

    pub fn is_registered(&self, account_id: &AccountId) -> bool {
        self.profiles.contains_key(account_id)
    }

    pub fn migrate() -> Self {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
        let current_version = Version::parse(CURRENT_VERSION)
            .unwrap_or_else(|_| env::panic_str("Invalid current version in Cargo.toml"));

        // Raw bytes of the single-field contract struct, which encode as the state itself.
        let state_bytes = env::storage_read(b"STATE")
            .unwrap_or_else(|| env::panic_str("No contract state to migrate"));
        let mut state = borsh::from_slice::<ProfileDirectoryState>(&state_bytes)
            .unwrap_or_else(|_| env::panic_str("No readable profile state to migrate"));

        match Version::parse(&state.version) {
            Ok(stored) if stored >= current_version => {
                env::log_str("State is at current or newer version, no migration needed");
            }
            _ => {
                let old_version =
                    std::mem::replace(&mut state.version, CURRENT_VERSION.to_string());
                ProfileEvent::StateMigrated {
                    old_version,
                    new_version: CURRENT_VERSION.to_string(),
                }
                .emit();
            }
        }
        state
    }
}

impl Default for ProfileDirectoryState {
    fn default() -> Self {
        Self::new()
    }
}
