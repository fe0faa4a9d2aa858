use near_sdk::{log, AccountId};

use crate::errors::GovernanceError;
use crate::events::GovernanceEvent;
use crate::groups::GroupStore;
use crate::types::{Proposal, ProposalId, ProposalStatus, ProposalType};
use crate::utils::now_secs;

use super::proposals::ProposalBook;

impl ProposalBook {
    /// Records one ballot and, if the tally now satisfies the group's rule,
    /// applies the proposal's effect within the same call.
    pub fn vote(
        &mut self,
        groups: &mut GroupStore,
        proposal_id: ProposalId,
        voter: &AccountId,
        support: bool,
    ) -> Result<ProposalStatus, GovernanceError> {
        let mut proposal = self.proposal(proposal_id)?.clone();

        if !groups.is_member(proposal.group_id, voter) {
            return Err(GovernanceError::NotAMember);
        }
        let ballot_key = (proposal_id, voter.clone());
        if self.ballots.contains_key(&ballot_key) {
            return Err(GovernanceError::AlreadyVoted);
        }
        let now = now_secs();
        if proposal.is_closed(now) {
            return Err(GovernanceError::VotingClosed);
        }
        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }

        let settings = &groups.group(proposal.group_id)?.settings;
        let should_execute = proposal.meets_execution_rule(settings);
        if should_execute {
            // Reject the whole vote rather than record a ballot whose effect cannot land.
            Self::check_effect(groups, &proposal)?;
        }

        self.ballots.insert(ballot_key, support);
        GovernanceEvent::VoteCast {
            proposal_id,
            voter: voter.clone(),
            support,
            votes_for: proposal.votes_for,
            votes_against: proposal.votes_against,
        }
        .emit();

        if should_execute {
            Self::apply_effect(groups, &proposal)?;
            proposal.executed = true;
            proposal.passed = true;
            log!("Proposal {} passed on vote by {}", proposal_id, voter);
            GovernanceEvent::ProposalExecuted {
                proposal_id,
                passed: true,
            }
            .emit();
        }

        let status = proposal.status(now);
        self.proposals.insert(proposal_id, proposal);
        Ok(status)
    }

    /// Closes a proposal whose deadline has passed. Already executed
    /// proposals are left untouched and report their final status.
    pub fn finalize(
        &mut self,
        groups: &mut GroupStore,
        proposal_id: ProposalId,
    ) -> Result<ProposalStatus, GovernanceError> {
        let mut proposal = self.proposal(proposal_id)?.clone();
        let now = now_secs();

        if proposal.executed {
            return Ok(proposal.status(now));
        }
        if !proposal.is_closed(now) {
            return Err(GovernanceError::VotingStillOpen);
        }

        let settings = &groups.group(proposal.group_id)?.settings;
        let passed = proposal.meets_execution_rule(settings)
            && Self::check_effect(groups, &proposal).is_ok();
        if passed {
            Self::apply_effect(groups, &proposal)?;
        }

        proposal.executed = true;
        proposal.passed = passed;
        let status = proposal.status(now);
        log!(
            "Proposal {} finalized after deadline: {}",
            proposal_id,
            status.as_str()
        );
        GovernanceEvent::ProposalExecuted {
            proposal_id,
            passed,
        }
        .emit();

        self.proposals.insert(proposal_id, proposal);
        Ok(status)
    }

    fn check_effect(groups: &GroupStore, proposal: &Proposal) -> Result<(), GovernanceError> {
        match proposal.proposal_type {
            ProposalType::AddMember => {
                groups.ensure_can_add(proposal.group_id, &proposal.target_member)
            }
            ProposalType::RemoveMember => {
                groups.ensure_can_remove(proposal.group_id, &proposal.target_member)
            }
            _ => Err(GovernanceError::UnsupportedProposalType),
        }
    }

    fn apply_effect(groups: &mut GroupStore, proposal: &Proposal) -> Result<(), GovernanceError> {
        match proposal.proposal_type {
            ProposalType::AddMember => groups.add_direct(
                proposal.group_id,
                &proposal.target_member,
                Some(proposal.id),
            ),
            ProposalType::RemoveMember => groups.remove_direct(
                proposal.group_id,
                &proposal.target_member,
                Some(proposal.id),
            ),
            _ => Err(GovernanceError::UnsupportedProposalType),
        }
    }
}
