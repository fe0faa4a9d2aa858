// --- Contract API Tests ---
// Drives the public endpoints with the caller taken from the predecessor account.

#[cfg(test)]
mod contract_api_tests {
    use crate::constants::MAX_PAGE_LIMIT;
    use crate::errors::GovernanceError;
    use crate::tests::test_utils::*;
    use crate::types::{GroupSettings, MembershipOutcome, ProposalStatus};
    use crate::GovernanceContract;

    fn setup_contract() -> GovernanceContract {
        act_as(&alice());
        GovernanceContract::new()
    }

    fn create_council(contract: &mut GovernanceContract) -> u64 {
        act_as(&alice());
        contract
            .create_group(
                "council".to_string(),
                vec![bob(), charlie()],
                Some(voting_settings()),
            )
            .unwrap()
    }

    #[test]
    fn test_full_membership_flow() {
        let mut contract = setup_contract();
        let group_id = create_council(&mut contract);

        act_as(&bob());
        let outcome = contract.add_member(group_id, danny(), None).unwrap();
        let MembershipOutcome::Proposed { proposal_id } = outcome else {
            panic!("Expected proposal");
        };

        assert_eq!(contract.vote(proposal_id, true).unwrap(), ProposalStatus::Active);
        act_as(&charlie());
        assert_eq!(contract.vote(proposal_id, true).unwrap(), ProposalStatus::Passed);

        assert!(contract.is_member(group_id, danny()));
        assert!(!contract.is_admin(group_id, danny()));
        assert!(contract.is_admin(group_id, alice()));
        assert_eq!(contract.get_user_groups(danny()), vec![group_id]);

        let info = contract.get_group_info(group_id).unwrap();
        assert_eq!(info.members, vec![alice(), bob(), charlie(), danny()]);
        assert_eq!(info.admins, vec![alice()]);
        assert_eq!(info.settings, voting_settings());

        let proposal = contract.get_proposal(proposal_id).unwrap();
        assert_eq!(proposal.status, ProposalStatus::Passed);
        assert_eq!(proposal.votes_for, 2);
    }

    #[test]
    fn test_default_settings_when_omitted() {
        let mut contract = setup_contract();
        let group_id = contract
            .create_group("defaults".to_string(), vec![], None)
            .unwrap();

        let info = contract.get_group_info(group_id).unwrap();
        assert_eq!(info.settings, GroupSettings::default());
        assert_eq!(info.creator, alice());
        assert_eq!(info.created_at, TEST_BASE_SECS);
    }

    #[test]
    fn test_get_vote_reports_recorded_choice() {
        let mut contract = setup_contract();
        let group_id = create_council(&mut contract);

        act_as(&bob());
        let MembershipOutcome::Proposed { proposal_id } =
            contract.add_member(group_id, danny(), None).unwrap()
        else {
            panic!("Expected proposal");
        };
        contract.vote(proposal_id, false).unwrap();

        assert_eq!(contract.get_vote(proposal_id, bob()), Some(false));
        assert_eq!(contract.get_vote(proposal_id, charlie()), None);
        assert_eq!(contract.get_vote(proposal_id + 1, bob()), None);
    }

    #[test]
    fn test_same_second_proposals_get_distinct_ids_and_digests() {
        let mut contract = setup_contract();
        let group_id = create_council(&mut contract);

        act_as(&bob());
        let first = contract.add_member(group_id, danny(), None).unwrap();
        let second = contract.add_member(group_id, eugene(), None).unwrap();

        let (MembershipOutcome::Proposed { proposal_id: a }, MembershipOutcome::Proposed { proposal_id: b }) =
            (first, second)
        else {
            panic!("Expected two proposals");
        };
        assert_ne!(a, b);

        let view_a = contract.get_proposal(a).unwrap();
        let view_b = contract.get_proposal(b).unwrap();
        assert_eq!(view_a.created_at, view_b.created_at);
        assert_ne!(view_a.audit_digest, view_b.audit_digest);
        assert_eq!(view_a.audit_digest.len(), 64);
    }

    #[test]
    fn test_group_proposals_pagination() {
        let mut contract = setup_contract();
        let group_id = create_council(&mut contract);

        act_as(&bob());
        let targets = [danny(), eugene(), "frank.near".parse().unwrap()];
        for target in targets.iter() {
            contract.add_member(group_id, target.clone(), None).unwrap();
        }

        let all = contract.get_group_proposals(group_id, 0, 10);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].target_member, danny());

        let page = contract.get_group_proposals(group_id, 1, 1);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].target_member, eugene());

        assert!(contract.get_group_proposals(group_id, 5, 10).is_empty());
        assert!(contract.get_group_proposals(group_id + 1, 0, 10).is_empty());
        assert_eq!(
            contract.get_group_proposals(group_id, 0, MAX_PAGE_LIMIT * 2).len(),
            3
        );
    }

    #[test]
    fn test_view_status_reflects_expiry() {
        let mut contract = setup_contract();
        let group_id = create_council(&mut contract);

        act_as(&bob());
        let MembershipOutcome::Proposed { proposal_id } =
            contract.add_member(group_id, danny(), None).unwrap()
        else {
            panic!("Expected proposal");
        };

        act_as_at(&eugene(), TEST_BASE_SECS + 3_601);
        assert_eq!(
            contract.get_proposal(proposal_id).unwrap().status,
            ProposalStatus::Expired
        );
        assert_eq!(
            contract.finalize_proposal(proposal_id).unwrap(),
            ProposalStatus::Rejected
        );
        assert_eq!(
            contract.get_proposal(proposal_id).unwrap().status,
            ProposalStatus::Rejected
        );
    }

    #[test]
    fn test_unknown_lookups_return_none() {
        let contract = setup_contract();
        assert!(contract.get_group_info(1).is_none());
        assert!(contract.get_proposal(1).is_none());
        assert!(contract.get_user_groups(alice()).is_empty());
        assert!(!contract.is_member(1, alice()));
        assert!(!contract.is_admin(1, alice()));
    }

    #[test]
    fn test_remove_endpoint_errors() {
        let mut contract = setup_contract();
        let group_id = create_council(&mut contract);

        act_as(&bob());
        assert_eq!(
            contract.remove_member(group_id, alice(), None),
            Err(GovernanceError::CreatorProtected)
        );
        act_as(&eugene());
        assert_eq!(
            contract.remove_member(group_id, bob(), None),
            Err(GovernanceError::Unauthorized)
        );
    }

    #[test]
    fn test_version_matches_package() {
        let contract = setup_contract();
        assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    }
}
