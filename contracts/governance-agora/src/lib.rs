use crate::errors::GovernanceError;
use crate::state::GovernanceState;
use crate::types::{
    GroupId, GroupInfo, GroupSettings, MembershipOutcome, ProposalId, ProposalStatus,
    ProposalView,
};
use near_sdk::{env, near, AccountId, PanicOnDefault};

pub mod constants;
pub mod errors;
mod events;
mod governance;
mod groups;
mod service;
pub mod state;
pub mod types;
mod utils;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct GovernanceContract {
    state: GovernanceState,
}

#[near]
impl GovernanceContract {
    #[init]
    pub fn new() -> Self {
        Self {
            state: GovernanceState::new(),
        }
    }

    // --- Group lifecycle ---

    /// Create a group owned by the caller. `settings = None` applies protocol defaults.
    #[handle_result]
    pub fn create_group(
        &mut self,
        name: String,
        initial_members: Vec<AccountId>,
        settings: Option<GroupSettings>,
    ) -> Result<GroupId, GovernanceError> {
        self.state.create_group(
            &env::predecessor_account_id(),
            name,
            initial_members,
            settings,
        )
    }

    #[handle_result]
    pub fn add_member(
        &mut self,
        group_id: GroupId,
        candidate: AccountId,
        description: Option<String>,
    ) -> Result<MembershipOutcome, GovernanceError> {
        self.state.add_member(
            &env::predecessor_account_id(),
            group_id,
            candidate,
            description,
        )
    }

    #[handle_result]
    pub fn remove_member(
        &mut self,
        group_id: GroupId,
        target: AccountId,
        description: Option<String>,
    ) -> Result<MembershipOutcome, GovernanceError> {
        self.state.remove_member(
            &env::predecessor_account_id(),
            group_id,
            target,
            description,
        )
    }

    // --- Voting ---

    #[handle_result]
    pub fn vote(
        &mut self,
        proposal_id: ProposalId,
        support: bool,
    ) -> Result<ProposalStatus, GovernanceError> {
        self.state
            .vote(&env::predecessor_account_id(), proposal_id, support)
    }

    /// Close a proposal whose voting period has ended. Callable by anyone.
    #[handle_result]
    pub fn finalize_proposal(
        &mut self,
        proposal_id: ProposalId,
    ) -> Result<ProposalStatus, GovernanceError> {
        self.state.finalize_proposal(proposal_id)
    }

    // --- Views ---

    pub fn get_group_info(&self, group_id: GroupId) -> Option<GroupInfo> {
        self.state.groups.group_info(group_id)
    }

    pub fn get_user_groups(&self, account_id: AccountId) -> Vec<GroupId> {
        self.state.groups.user_groups(&account_id)
    }

    pub fn is_member(&self, group_id: GroupId, account_id: AccountId) -> bool {
        self.state.groups.is_member(group_id, &account_id)
    }

    pub fn is_admin(&self, group_id: GroupId, account_id: AccountId) -> bool {
        self.state.groups.is_admin(group_id, &account_id)
    }

    pub fn get_proposal(&self, proposal_id: ProposalId) -> Option<ProposalView> {
        self.state.proposals.view(proposal_id)
    }

    pub fn get_vote(&self, proposal_id: ProposalId, voter: AccountId) -> Option<bool> {
        self.state.proposals.ballot(proposal_id, &voter)
    }

    pub fn get_group_proposals(
        &self,
        group_id: GroupId,
        offset: u32,
        limit: u32,
    ) -> Vec<ProposalView> {
        self.state.proposals.group_proposals(group_id, offset, limit)
    }

    pub fn get_version(&self) -> String {
        self.state.version.clone()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: GovernanceState::migrate(),
        }
    }
}
