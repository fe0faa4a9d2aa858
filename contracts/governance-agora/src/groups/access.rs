use near_sdk::AccountId;

use crate::types::GroupId;

use super::GroupStore;

/// Authorization predicates. Unknown groups answer `false` everywhere.
impl GroupStore {
    pub fn is_member(&self, group_id: GroupId, account_id: &AccountId) -> bool {
        self.members
            .get(&group_id)
            .is_some_and(|set| set.contains(account_id))
    }

    pub fn is_admin(&self, group_id: GroupId, account_id: &AccountId) -> bool {
        self.admins
            .get(&group_id)
            .is_some_and(|set| set.contains(account_id))
    }

    pub fn is_creator(&self, group_id: GroupId, account_id: &AccountId) -> bool {
        self.groups
            .get(&group_id)
            .is_some_and(|group| &group.creator == account_id)
    }
}
