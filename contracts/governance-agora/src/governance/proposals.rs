use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{LookupMap, Vector};
use near_sdk::{env, log, AccountId};

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_PAGE_LIMIT};
use crate::errors::GovernanceError;
use crate::events::GovernanceEvent;
use crate::groups::GroupStore;
use crate::state::StorageKey;
use crate::types::{GroupId, Proposal, ProposalId, ProposalType, ProposalView};
use crate::utils::{now_secs, require_max_len};

/// Proposal records, one ballot entry per (proposal, voter), and a per-group index.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct ProposalBook {
    pub(crate) next_proposal_id: ProposalId,
    pub(crate) proposals: LookupMap<ProposalId, Proposal>,
    pub(crate) ballots: LookupMap<(ProposalId, AccountId), bool>,
    pub(crate) group_proposals: LookupMap<GroupId, Vector<ProposalId>>,
}

impl ProposalBook {
    pub fn new() -> Self {
        Self {
            next_proposal_id: 1,
            proposals: LookupMap::new(StorageKey::Proposals),
            ballots: LookupMap::new(StorageKey::Ballots),
            group_proposals: LookupMap::new(StorageKey::GroupProposals),
        }
    }

    /// Records a pending proposal. Authorization is the caller's job; only
    /// membership changes are accepted since nothing executes the other types.
    pub fn create_proposal(
        &mut self,
        groups: &GroupStore,
        group_id: GroupId,
        proposer: &AccountId,
        proposal_type: ProposalType,
        target_member: &AccountId,
        description: String,
    ) -> Result<ProposalId, GovernanceError> {
        if !proposal_type.is_executable() {
            return Err(GovernanceError::UnsupportedProposalType);
        }
        require_max_len("description", &description, MAX_DESCRIPTION_LENGTH)?;
        let voting_duration = groups.group(group_id)?.settings.voting_duration;

        let proposal_id = self.next_proposal_id;
        self.next_proposal_id += 1;

        let created_at = now_secs();
        let deadline = created_at.saturating_add(voting_duration);
        let audit_digest = Self::audit_digest(
            group_id,
            proposer,
            proposal_type,
            created_at,
            proposal_id,
        );

        self.proposals.insert(
            proposal_id,
            Proposal {
                id: proposal_id,
                group_id,
                proposer: proposer.clone(),
                proposal_type,
                target_member: target_member.clone(),
                description,
                votes_for: 0,
                votes_against: 0,
                created_at,
                deadline,
                executed: false,
                passed: false,
                audit_digest,
            },
        );

        if !self.group_proposals.contains_key(&group_id) {
            self.group_proposals.insert(
                group_id,
                Vector::new(StorageKey::GroupProposalList { group_id }),
            );
        }
        if let Some(list) = self.group_proposals.get_mut(&group_id) {
            list.push(proposal_id);
        }

        log!(
            "Proposal {} ({}) raised in group {} by {}",
            proposal_id,
            proposal_type.as_str(),
            group_id,
            proposer
        );
        GovernanceEvent::ProposalCreated {
            proposal_id,
            group_id,
            proposer: proposer.clone(),
            proposal_type,
            target_member: target_member.clone(),
            deadline,
        }
        .emit();

        Ok(proposal_id)
    }

    pub fn proposal(&self, proposal_id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound)
    }

    pub fn view(&self, proposal_id: ProposalId) -> Option<ProposalView> {
        self.proposals
            .get(&proposal_id)
            .map(|proposal| proposal.to_view(now_secs()))
    }

    pub fn ballot(&self, proposal_id: ProposalId, voter: &AccountId) -> Option<bool> {
        self.ballots.get(&(proposal_id, voter.clone())).copied()
    }

    pub fn group_proposals(&self, group_id: GroupId, offset: u32, limit: u32) -> Vec<ProposalView> {
        let Some(list) = self.group_proposals.get(&group_id) else {
            return Vec::new();
        };
        let now = now_secs();
        list.iter()
            .skip(offset as usize)
            .take(limit.min(MAX_PAGE_LIMIT) as usize)
            .filter_map(|id| self.proposals.get(id))
            .map(|proposal| proposal.to_view(now))
            .collect()
    }

    /// Ids come from the sequence; the digest only makes the creation inputs auditable.
    fn audit_digest(
        group_id: GroupId,
        proposer: &AccountId,
        proposal_type: ProposalType,
        created_at: u64,
        sequence: ProposalId,
    ) -> [u8; 32] {
        let preimage = borsh::to_vec(&(group_id, proposer, proposal_type, created_at, sequence))
            .unwrap_or_else(|_| env::panic_str("Failed to encode proposal digest"));
        env::keccak256_array(&preimage)
    }
}

impl Default for ProposalBook {
    fn default() -> Self {
        Self::new()
    }
}
