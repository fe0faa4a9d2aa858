// --- Routing Tests ---
// add_member / remove_member decide between a direct change and a proposal.

#[cfg(test)]
mod routing_tests {
    use crate::errors::{ErrorKind, GovernanceError};
    use crate::tests::test_utils::*;
    use crate::types::{MembershipOutcome, ProposalType};

    #[test]
    fn test_member_adds_directly_when_no_vote_required() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, open_settings());

        act_as(&bob());
        let outcome = state.add_member(&bob(), group_id, danny(), None).unwrap();

        assert_eq!(outcome, MembershipOutcome::Applied);
        assert!(state.groups.is_member(group_id, &danny()));
        assert_eq!(count_events("member_added"), 1);
        assert_eq!(count_events("proposal_created"), 0);
        assert!(state.proposals.group_proposals(group_id, 0, 10).is_empty());
    }

    #[test]
    fn test_non_admin_add_raises_proposal_when_vote_required() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        let proposal_id = propose_add_danny(&mut state, group_id);

        assert!(!state.groups.is_member(group_id, &danny()));
        assert!(state.groups.user_groups(&danny()).is_empty());
        let proposal = state.proposals.proposal(proposal_id).unwrap();
        assert_eq!(proposal.proposal_type, ProposalType::AddMember);
        assert_eq!(proposal.target_member, danny());
        assert_eq!(proposal.proposer, bob());
        assert_eq!(proposal.deadline, TEST_BASE_SECS + 3_600);
        assert!(!proposal.executed);
        assert_eq!(count_events("proposal_created"), 1);
        assert_eq!(count_events("member_added"), 0);
    }

    #[test]
    fn test_admin_adds_directly_even_when_vote_required() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        act_as(&alice());
        let outcome = state.add_member(&alice(), group_id, danny(), None).unwrap();

        assert_eq!(outcome, MembershipOutcome::Applied);
        assert!(state.groups.is_member(group_id, &danny()));
        assert_eq!(count_events("proposal_created"), 0);
    }

    #[test]
    fn test_add_by_non_member_fails() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, open_settings());

        act_as(&eugene());
        let result = state.add_member(&eugene(), group_id, danny(), None);

        assert_eq!(result, Err(GovernanceError::NotAGroupMember));
        assert_eq!(
            GovernanceError::NotAGroupMember.kind(),
            ErrorKind::Authorization
        );
        assert!(!state.groups.is_member(group_id, &danny()));
    }

    #[test]
    fn test_add_existing_member_fails_on_both_paths() {
        let mut state = setup_state();
        let open = create_test_group(&mut state, open_settings());
        let voting = create_test_group(&mut state, voting_settings());

        act_as(&bob());
        assert_eq!(
            state.add_member(&bob(), open, charlie(), None),
            Err(GovernanceError::AlreadyMember)
        );
        assert_eq!(
            state.add_member(&bob(), voting, charlie(), None),
            Err(GovernanceError::AlreadyMember)
        );
        assert!(state.proposals.group_proposals(voting, 0, 10).is_empty());
    }

    #[test]
    fn test_add_to_unknown_group() {
        let mut state = setup_state();
        assert_eq!(
            state.add_member(&alice(), 3, bob(), None),
            Err(GovernanceError::GroupNotFound)
        );
    }

    #[test]
    fn test_custom_description_kept() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        act_as(&bob());
        let outcome = state
            .add_member(&bob(), group_id, danny(), Some("Danny runs the meetups".to_string()))
            .unwrap();
        let MembershipOutcome::Proposed { proposal_id } = outcome else {
            panic!("Expected proposal");
        };
        assert_eq!(
            state.proposals.proposal(proposal_id).unwrap().description,
            "Danny runs the meetups"
        );
    }

    #[test]
    fn test_creator_removal_always_fails() {
        let mut state = setup_state();
        let voting = create_test_group(&mut state, voting_settings());
        let open = create_test_group(&mut state, open_settings());

        for group_id in [voting, open] {
            for caller in [alice(), bob(), eugene()] {
                act_as(&caller);
                let result = state.remove_member(&caller, group_id, alice(), None);
                assert_eq!(result, Err(GovernanceError::CreatorProtected));
            }
            assert!(state.groups.is_member(group_id, &alice()));
        }
        assert!(state.proposals.group_proposals(voting, 0, 10).is_empty());
    }

    #[test]
    fn test_admin_removes_directly_when_vote_required() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        act_as(&alice());
        let outcome = state.remove_member(&alice(), group_id, bob(), None).unwrap();

        assert_eq!(outcome, MembershipOutcome::Applied);
        assert!(!state.groups.is_member(group_id, &bob()));
        assert!(state.groups.user_groups(&bob()).is_empty());
        assert_eq!(count_events("member_removed"), 1);
    }

    #[test]
    fn test_non_admin_remove_raises_proposal_when_vote_required() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        act_as(&bob());
        let outcome = state.remove_member(&bob(), group_id, charlie(), None).unwrap();

        assert!(matches!(outcome, MembershipOutcome::Proposed { .. }));
        assert!(state.groups.is_member(group_id, &charlie()));
    }

    #[test]
    fn test_non_admin_remove_unauthorized_without_vote() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, open_settings());

        act_as(&bob());
        let result = state.remove_member(&bob(), group_id, charlie(), None);

        assert_eq!(result, Err(GovernanceError::Unauthorized));
        assert_eq!(
            GovernanceError::Unauthorized.to_string(),
            "Unauthorized to remove member"
        );
        assert!(state.groups.is_member(group_id, &charlie()));
    }

    #[test]
    fn test_non_member_cannot_raise_removal() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        act_as(&eugene());
        let result = state.remove_member(&eugene(), group_id, charlie(), None);
        assert_eq!(result, Err(GovernanceError::Unauthorized));
        assert!(state.proposals.group_proposals(group_id, 0, 10).is_empty());
    }

    #[test]
    fn test_remove_non_member_target() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        act_as(&alice());
        assert_eq!(
            state.remove_member(&alice(), group_id, eugene(), None),
            Err(GovernanceError::NotAMember)
        );
    }

    #[test]
    fn test_admin_flag_follows_membership() {
        let mut state = setup_state();
        let group_id = create_test_group(&mut state, voting_settings());

        assert!(state.groups.is_admin(group_id, &alice()));
        assert!(!state.groups.is_admin(group_id, &bob()));
        assert!(state.groups.is_creator(group_id, &alice()));
        assert!(!state.groups.is_creator(group_id, &bob()));
    }
}
