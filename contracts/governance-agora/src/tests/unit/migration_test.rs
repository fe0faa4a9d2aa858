// --- Migration Tests ---
// State is written the way the runtime stores it, then re-read by `migrate`.

#[cfg(test)]
mod migration_tests {
    use crate::tests::test_utils::*;
    use crate::types::GroupSettings;
    use crate::GovernanceContract;
    use near_sdk::env;

    fn persist(contract: GovernanceContract) {
        env::state_write(&contract);
        // Dropping flushes the cached collection entries to storage.
        drop(contract);
    }

    #[test]
    fn test_migrate_same_version_keeps_state() {
        act_as(&alice());
        let mut contract = GovernanceContract::new();
        let group_id = contract
            .create_group(
                "council".to_string(),
                vec![bob()],
                Some(GroupSettings::default()),
            )
            .unwrap();
        persist(contract);

        act_as(&alice());
        let migrated = GovernanceContract::migrate();

        assert_eq!(migrated.get_version(), env!("CARGO_PKG_VERSION"));
        let info = migrated.get_group_info(group_id).unwrap();
        assert_eq!(info.members, vec![alice(), bob()]);
        assert_eq!(migrated.get_user_groups(bob()), vec![group_id]);
        assert_eq!(count_events("state_migrated"), 0);
    }

    #[test]
    fn test_migrate_from_older_version_bumps_and_emits() {
        act_as(&alice());
        let mut contract = GovernanceContract::new();
        let group_id = contract
            .create_group("council".to_string(), vec![], None)
            .unwrap();
        contract.state.version = "0.0.1".to_string();
        persist(contract);

        act_as(&alice());
        let mut migrated = GovernanceContract::migrate();

        assert_eq!(migrated.get_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(count_events("state_migrated"), 1);
        assert!(migrated.is_admin(group_id, alice()));

        // Sequences continue from the stored counters.
        let next = migrated
            .create_group("second".to_string(), vec![], None)
            .unwrap();
        assert_eq!(next, group_id + 1);
    }

    #[test]
    fn test_migrate_unparseable_version_is_replaced() {
        act_as(&alice());
        let mut contract = GovernanceContract::new();
        contract.state.version = "legacy".to_string();
        persist(contract);

        act_as(&alice());
        let migrated = GovernanceContract::migrate();
        assert_eq!(migrated.get_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(count_events("state_migrated"), 1);
    }

    #[test]
    #[should_panic(expected = "No contract state to migrate")]
    fn test_migrate_without_state_panics() {
        act_as(&alice());
        GovernanceContract::migrate();
    }
}
