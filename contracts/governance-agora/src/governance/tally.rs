use crate::constants::PERCENT_DENOMINATOR;
use crate::types::{GroupSettings, Proposal, ProposalStatus, ProposalView};

impl Proposal {
    pub fn total_votes(&self) -> u64 {
        self.votes_for.saturating_add(self.votes_against)
    }

    /// `total >= minimum_votes_required` and `floor(for * 100 / total) >= threshold`.
    /// No votes never passes.
    pub fn meets_execution_rule(&self, settings: &GroupSettings) -> bool {
        let total = self.total_votes();
        if total == 0 || total < settings.minimum_votes_required {
            return false;
        }
        let percent_for = (self.votes_for as u128 * PERCENT_DENOMINATOR) / total as u128;
        percent_for >= settings.voting_threshold as u128
    }

    pub fn is_closed(&self, now: u64) -> bool {
        now > self.deadline
    }

    pub fn status(&self, now: u64) -> ProposalStatus {
        match (self.executed, self.passed) {
            (true, true) => ProposalStatus::Passed,
            (true, false) => ProposalStatus::Rejected,
            _ if self.is_closed(now) => ProposalStatus::Expired,
            _ => ProposalStatus::Active,
        }
    }

    pub fn to_view(&self, now: u64) -> ProposalView {
        ProposalView {
            id: self.id,
            group_id: self.group_id,
            proposer: self.proposer.clone(),
            proposal_type: self.proposal_type,
            target_member: self.target_member.clone(),
            description: self.description.clone(),
            votes_for: self.votes_for,
            votes_against: self.votes_against,
            created_at: self.created_at,
            deadline: self.deadline,
            executed: self.executed,
            passed: self.passed,
            status: self.status(now),
            audit_digest: hex::encode(self.audit_digest),
        }
    }
}
