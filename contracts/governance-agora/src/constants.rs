//! Protocol defaults and input limits for the governance contract.
//!
//! Defines:
//! - Default group settings applied when `create_group` gets no settings
//! - Length limits for names and descriptions
//! - Pagination cap for list views

// Default group settings
pub const DEFAULT_VOTING_DURATION_SECS: u64 = 604_800; // 7 days
pub const DEFAULT_MINIMUM_VOTES: u64 = 1;
pub const DEFAULT_VOTING_THRESHOLD: u8 = 51;
pub const DEFAULT_REQUIRE_VOTE_TO_ADD: bool = true;
pub const DEFAULT_REQUIRE_VOTE_TO_REMOVE: bool = true;
pub const DEFAULT_REQUIRE_VOTE_TO_CHANGE_SETTINGS: bool = true;

// Input limits
// Group creation otherwise accepts any name; this cap is the one added failure
// (`InvalidInput`) and is a deliberate departure from unchecked names.
pub const MAX_GROUP_NAME_LENGTH: usize = 128;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

// Pagination
pub const MAX_PAGE_LIMIT: u32 = 100;

// Percentages are whole numbers out of 100
pub const PERCENT_DENOMINATOR: u128 = 100;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
