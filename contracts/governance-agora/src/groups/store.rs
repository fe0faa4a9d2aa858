use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{IterableSet, LookupMap};
use near_sdk::{log, AccountId};

use crate::constants::MAX_GROUP_NAME_LENGTH;
use crate::errors::GovernanceError;
use crate::events::GovernanceEvent;
use crate::state::StorageKey;
use crate::types::{Group, GroupId, GroupInfo, GroupSettings};
use crate::utils::{now_secs, require_max_len};

/// Canonical group records plus the membership sets and reverse index kept beside them.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct GroupStore {
    pub(crate) next_group_id: GroupId,
    pub(crate) groups: LookupMap<GroupId, Group>,
    pub(crate) members: LookupMap<GroupId, IterableSet<AccountId>>,
    pub(crate) admins: LookupMap<GroupId, IterableSet<AccountId>>,
    pub(crate) user_groups: LookupMap<AccountId, IterableSet<GroupId>>,
}

impl GroupStore {
    pub fn new() -> Self {
        Self {
            next_group_id: 1,
            groups: LookupMap::new(StorageKey::Groups),
            members: LookupMap::new(StorageKey::Members),
            admins: LookupMap::new(StorageKey::Admins),
            user_groups: LookupMap::new(StorageKey::UserGroups),
        }
    }

    /// Creator becomes the sole admin and first member; duplicates in
    /// `initial_members` (including the creator) are listed once.
    pub fn create_group(
        &mut self,
        name: String,
        initial_members: Vec<AccountId>,
        settings: GroupSettings,
        creator: &AccountId,
    ) -> Result<GroupId, GovernanceError> {
        require_max_len("name", &name, MAX_GROUP_NAME_LENGTH)?;

        let group_id = self.next_group_id;
        self.next_group_id += 1;
        log!("Creating group {} for {}", group_id, creator);

        self.groups.insert(
            group_id,
            Group {
                id: group_id,
                name: name.clone(),
                creator: creator.clone(),
                settings,
                created_at: now_secs(),
                is_active: true,
            },
        );

        let mut admins = IterableSet::new(StorageKey::AdminSet { group_id });
        admins.insert(creator.clone());
        self.admins.insert(group_id, admins);
        self.members
            .insert(group_id, IterableSet::new(StorageKey::MemberSet { group_id }));

        let mut added = Vec::with_capacity(initial_members.len() + 1);
        for account in std::iter::once(creator.clone()).chain(initial_members) {
            let inserted = self
                .members
                .get_mut(&group_id)
                .is_some_and(|set| set.insert(account.clone()));
            if inserted {
                self.index_insert(&account, group_id);
                added.push(account);
            }
        }

        GovernanceEvent::GroupCreated {
            group_id,
            name,
            creator: creator.clone(),
            members: added,
        }
        .emit();

        Ok(group_id)
    }

    pub fn group(&self, group_id: GroupId) -> Result<&Group, GovernanceError> {
        self.groups
            .get(&group_id)
            .ok_or(GovernanceError::GroupNotFound)
    }

    pub fn group_info(&self, group_id: GroupId) -> Option<GroupInfo> {
        let group = self.groups.get(&group_id)?;
        Some(GroupInfo {
            id: group.id,
            name: group.name.clone(),
            creator: group.creator.clone(),
            members: self.members_of(group_id),
            admins: self
                .admins
                .get(&group_id)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default(),
            settings: group.settings.clone(),
            created_at: group.created_at,
            is_active: group.is_active,
        })
    }

    /// Members in stored order. Removals swap the last member into the freed slot.
    pub fn members_of(&self, group_id: GroupId) -> Vec<AccountId> {
        self.members
            .get(&group_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn user_groups(&self, account_id: &AccountId) -> Vec<GroupId> {
        self.user_groups
            .get(account_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub(crate) fn index_insert(&mut self, account_id: &AccountId, group_id: GroupId) {
        if !self.user_groups.contains_key(account_id) {
            self.user_groups.insert(
                account_id.clone(),
                IterableSet::new(StorageKey::UserGroupSet {
                    account_id: account_id.clone(),
                }),
            );
        }
        if let Some(set) = self.user_groups.get_mut(account_id) {
            set.insert(group_id);
        }
    }

    pub(crate) fn index_remove(&mut self, account_id: &AccountId, group_id: GroupId) {
        if let Some(set) = self.user_groups.get_mut(account_id) {
            set.remove(&group_id);
        }
    }
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new()
    }
}
