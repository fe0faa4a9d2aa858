use near_sdk::{near, AccountId};

use crate::types::{GroupId, ProposalId, ProposalType};

#[near(event_json(standard = "nep297"))]
pub enum GovernanceEvent {
    #[event_version("1.0.0")]
    GroupCreated {
        group_id: GroupId,
        name: String,
        creator: AccountId,
        members: Vec<AccountId>,
    },
    #[event_version("1.0.0")]
    MemberAdded {
        group_id: GroupId,
        member: AccountId,
        proposal_id: Option<ProposalId>,
    },
    #[event_version("1.0.0")]
    MemberRemoved {
        group_id: GroupId,
        member: AccountId,
        proposal_id: Option<ProposalId>,
    },
    #[event_version("1.0.0")]
    ProposalCreated {
        proposal_id: ProposalId,
        group_id: GroupId,
        proposer: AccountId,
        proposal_type: ProposalType,
        target_member: AccountId,
        deadline: u64,
    },
    #[event_version("1.0.0")]
    VoteCast {
        proposal_id: ProposalId,
        voter: AccountId,
        support: bool,
        votes_for: u64,
        votes_against: u64,
    },
    #[event_version("1.0.0")]
    ProposalExecuted { proposal_id: ProposalId, passed: bool },
    #[event_version("1.0.0")]
    StateMigrated { old_version: String, new_version: String },
}
