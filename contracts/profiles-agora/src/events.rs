use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum ProfileEvent {
    #[event_version("1.0.0")]
    ProfileRegistered { account_id: AccountId, username: String, public_key: String },
    #[event_version("1.0.0")]
    StatusChanged { account_id: AccountId, is_online: bool, last_seen: u64 },
    #[event_version("1.0.0")]
    StateMigrated { old_version: String, new_version: String },
}
