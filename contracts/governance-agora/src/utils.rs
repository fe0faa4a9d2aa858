use near_sdk::env;

use crate::constants::NANOS_PER_SECOND;
use crate::errors::GovernanceError;
use crate::invalid_input;

/// Block time in whole seconds.
pub(crate) fn now_secs() -> u64 {
    env::block_timestamp() / NANOS_PER_SECOND
}

pub(crate) fn require_max_len(
    field: &str,
    value: &str,
    max_len: usize,
) -> Result<(), GovernanceError> {
    if value.len() > max_len {
        return Err(invalid_input!(format!(
            "{} exceeds {} bytes",
            field, max_len
        )));
    }
    Ok(())
}
