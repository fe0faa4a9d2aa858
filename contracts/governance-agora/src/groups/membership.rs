use near_sdk::{log, AccountId};

use crate::errors::GovernanceError;
use crate::events::GovernanceEvent;
use crate::types::{GroupId, ProposalId};

use super::GroupStore;

impl GroupStore {
    pub fn ensure_can_add(
        &self,
        group_id: GroupId,
        account_id: &AccountId,
    ) -> Result<(), GovernanceError> {
        self.group(group_id)?;
        if self.is_member(group_id, account_id) {
            return Err(GovernanceError::AlreadyMember);
        }
        Ok(())
    }

    pub fn ensure_can_remove(
        &self,
        group_id: GroupId,
        account_id: &AccountId,
    ) -> Result<(), GovernanceError> {
        self.group(group_id)?;
        if self.is_creator(group_id, account_id) {
            return Err(GovernanceError::CreatorProtected);
        }
        if !self.is_member(group_id, account_id) {
            return Err(GovernanceError::NotAMember);
        }
        Ok(())
    }

    /// Appends `account_id` to the member list and the reverse index.
    /// `proposal_id` is set when the change comes from an executed proposal.
    pub fn add_direct(
        &mut self,
        group_id: GroupId,
        account_id: &AccountId,
        proposal_id: Option<ProposalId>,
    ) -> Result<(), GovernanceError> {
        self.ensure_can_add(group_id, account_id)?;

        if let Some(set) = self.members.get_mut(&group_id) {
            set.insert(account_id.clone());
        }
        self.index_insert(account_id, group_id);
        log!("Added {} to group {}", account_id, group_id);

        GovernanceEvent::MemberAdded {
            group_id,
            member: account_id.clone(),
            proposal_id,
        }
        .emit();
        Ok(())
    }

    /// Swap-removes `account_id` from the member list and the reverse index,
    /// dropping any admin flag with it. The creator can never be removed.
    pub fn remove_direct(
        &mut self,
        group_id: GroupId,
        account_id: &AccountId,
        proposal_id: Option<ProposalId>,
    ) -> Result<(), GovernanceError> {
        self.ensure_can_remove(group_id, account_id)?;

        if let Some(set) = self.members.get_mut(&group_id) {
            set.remove(account_id);
        }
        if let Some(set) = self.admins.get_mut(&group_id) {
            set.remove(account_id);
        }
        self.index_remove(account_id, group_id);
        log!("Removed {} from group {}", account_id, group_id);

        GovernanceEvent::MemberRemoved {
            group_id,
            member: account_id.clone(),
            proposal_id,
        }
        .emit();
        Ok(())
    }
}
