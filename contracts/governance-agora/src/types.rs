//! Types module: records and views shared by the governance contract.
//!
//! - `Group` and `Proposal` are the stored records; member, admin and ballot
//!   sets are kept in their own collections next to them (see `state.rs`).
//! - `GroupInfo` and `ProposalView` are the read-only projections returned by views.

use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::AccountId;
use near_sdk_macros::NearSchema;
use serde::{Deserialize, Serialize};

use crate::constants::*;

pub type GroupId = u64;
pub type ProposalId = u64;

#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize, NearSchema,
)]
#[serde(crate = "near_sdk::serde")]
#[borsh(crate = "near_sdk::borsh")]
#[abi(json, borsh)]
pub struct GroupSettings {
    pub require_vote_to_add_member: bool,
    pub require_vote_to_remove_member: bool,
    pub require_vote_to_change_settings: bool,
    /// Seconds, relative to proposal creation.
    pub voting_duration: u64,
    pub minimum_votes_required: u64,
    /// Whole percent of "for" votes among cast votes.
    pub voting_threshold: u8,
}

impl Default for GroupSettings {
    fn default() -> Self {
        Self {
            require_vote_to_add_member: DEFAULT_REQUIRE_VOTE_TO_ADD,
            require_vote_to_remove_member: DEFAULT_REQUIRE_VOTE_TO_REMOVE,
            require_vote_to_change_settings: DEFAULT_REQUIRE_VOTE_TO_CHANGE_SETTINGS,
            voting_duration: DEFAULT_VOTING_DURATION_SECS,
            minimum_votes_required: DEFAULT_MINIMUM_VOTES,
            voting_threshold: DEFAULT_VOTING_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub creator: AccountId,
    pub settings: GroupSettings,
    pub created_at: u64,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct GroupInfo {
    pub id: GroupId,
    pub name: String,
    pub creator: AccountId,
    pub members: Vec<AccountId>,
    pub admins: Vec<AccountId>,
    pub settings: GroupSettings,
    pub created_at: u64,
    pub is_active: bool,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize, NearSchema,
)]
#[serde(crate = "near_sdk::serde")]
#[borsh(crate = "near_sdk::borsh")]
#[abi(json, borsh)]
pub enum ProposalType {
    AddMember,
    RemoveMember,
    ChangeAdmin,
    UpdateSettings,
    ChangeGroupName,
}

impl ProposalType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddMember => "add_member",
            Self::RemoveMember => "remove_member",
            Self::ChangeAdmin => "change_admin",
            Self::UpdateSettings => "update_settings",
            Self::ChangeGroupName => "change_group_name",
        }
    }

    /// Only membership changes have an executor.
    pub fn is_executable(self) -> bool {
        matches!(self, Self::AddMember | Self::RemoveMember)
    }
}

#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct Proposal {
    pub id: ProposalId,
    pub group_id: GroupId,
    pub proposer: AccountId,
    pub proposal_type: ProposalType,
    pub target_member: AccountId,
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    pub created_at: u64,
    pub deadline: u64,
    pub executed: bool,
    pub passed: bool,
    pub audit_digest: [u8; 32],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[serde(rename_all = "snake_case")]
#[abi(json)]
pub enum ProposalStatus {
    /// Open for votes.
    Active,
    /// Deadline passed without execution; waiting for `finalize_proposal`.
    Expired,
    Passed,
    Rejected,
}

impl ProposalStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Passed => "passed",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[abi(json)]
pub struct ProposalView {
    pub id: ProposalId,
    pub group_id: GroupId,
    pub proposer: AccountId,
    pub proposal_type: ProposalType,
    pub target_member: AccountId,
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    pub created_at: u64,
    pub deadline: u64,
    pub executed: bool,
    pub passed: bool,
    pub status: ProposalStatus,
    pub audit_digest: String,
}

/// Result of a membership intent: applied on the spot or raised for a vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, NearSchema)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[abi(json)]
pub enum MembershipOutcome {
    Applied,
    Proposed { proposal_id: ProposalId },
}
