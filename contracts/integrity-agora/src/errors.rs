use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

#[derive(Debug, PartialEq, NearSchema, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
#[abi(borsh)]
pub enum IntegrityError {
    InvalidHash,
}

impl FunctionError for IntegrityError {
    fn panic(&self) -> ! {
        env::panic_str(match self {
            IntegrityError::InvalidHash => "Content hash must be 32 bytes of hex",
        })
    }
}
