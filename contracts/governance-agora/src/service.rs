//! Entry façade: routes each membership intent to a direct change or a proposal.

use near_sdk::{log, AccountId};

use crate::errors::GovernanceError;
use crate::state::GovernanceState;
use crate::types::{
    GroupId, GroupSettings, MembershipOutcome, ProposalId, ProposalStatus, ProposalType,
};

impl GovernanceState {
    pub fn create_group(
        &mut self,
        caller: &AccountId,
        name: String,
        initial_members: Vec<AccountId>,
        settings: Option<GroupSettings>,
    ) -> Result<GroupId, GovernanceError> {
        self.groups
            .create_group(name, initial_members, settings.unwrap_or_default(), caller)
    }

    /// Members may add when no vote is required; admins always add directly;
    /// everyone else raises an AddMember proposal.
    pub fn add_member(
        &mut self,
        caller: &AccountId,
        group_id: GroupId,
        candidate: AccountId,
        description: Option<String>,
    ) -> Result<MembershipOutcome, GovernanceError> {
        let require_vote = self
            .groups
            .group(group_id)?
            .settings
            .require_vote_to_add_member;
        if !self.groups.is_member(group_id, caller) {
            return Err(GovernanceError::NotAGroupMember);
        }
        if self.groups.is_member(group_id, &candidate) {
            return Err(GovernanceError::AlreadyMember);
        }

        if !require_vote || self.groups.is_admin(group_id, caller) {
            log!("Direct add of {} to group {} by {}", candidate, group_id, caller);
            self.groups.add_direct(group_id, &candidate, None)?;
            return Ok(MembershipOutcome::Applied);
        }

        let description =
            description.unwrap_or_else(|| format!("Add {} to group {}", candidate, group_id));
        let proposal_id = self.proposals.create_proposal(
            &self.groups,
            group_id,
            caller,
            ProposalType::AddMember,
            &candidate,
            description,
        )?;
        Ok(MembershipOutcome::Proposed { proposal_id })
    }

    /// Admins remove directly regardless of settings; other members can only
    /// raise a RemoveMember proposal, and only when the group votes on removals.
    pub fn remove_member(
        &mut self,
        caller: &AccountId,
        group_id: GroupId,
        target: AccountId,
        description: Option<String>,
    ) -> Result<MembershipOutcome, GovernanceError> {
        let require_vote = self
            .groups
            .group(group_id)?
            .settings
            .require_vote_to_remove_member;
        self.groups.ensure_can_remove(group_id, &target)?;

        if self.groups.is_admin(group_id, caller) {
            log!("Direct removal of {} from group {} by {}", target, group_id, caller);
            self.groups.remove_direct(group_id, &target, None)?;
            return Ok(MembershipOutcome::Applied);
        }
        if !require_vote || !self.groups.is_member(group_id, caller) {
            return Err(GovernanceError::Unauthorized);
        }

        let description =
            description.unwrap_or_else(|| format!("Remove {} from group {}", target, group_id));
        let proposal_id = self.proposals.create_proposal(
            &self.groups,
            group_id,
            caller,
            ProposalType::RemoveMember,
            &target,
            description,
        )?;
        Ok(MembershipOutcome::Proposed { proposal_id })
    }

    pub fn vote(
        &mut self,
        caller: &AccountId,
        proposal_id: ProposalId,
        support: bool,
    ) -> Result<ProposalStatus, GovernanceError> {
        self.proposals
            .vote(&mut self.groups, proposal_id, caller, support)
    }

    pub fn finalize_proposal(
        &mut self,
        proposal_id: ProposalId,
    ) -> Result<ProposalStatus, GovernanceError> {
        self.proposals.finalize(&mut self.groups, proposal_id)
    }
}
