use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

#[derive(Debug, PartialEq, NearSchema, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
#[abi(borsh)]
pub enum ProfileError {
    InvalidUsername,
    ProfileNotFound,
}

impl FunctionError for ProfileError {
    fn panic(&self) -> ! {
        env::panic_str(match self {
            ProfileError::InvalidUsername => "Username must be 1 to 64 characters",
            ProfileError::ProfileNotFound => "Profile not found",
        })
    }
}
