// ============================================================================
// Groups Infrastructure - In-Memory Group Repository
// File: crates/groups-infrastructure/src/memory/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{debug, info};

use groups_core::domain::{new_id, Group, NamePolicy};
use groups_core::error::DomainError;
use groups_core::repositories::{GroupRepository, ListQuery};

/// Ephemeral store: one map, one lock held for the whole of every operation.
#[derive(Default)]
pub struct InMemoryGroupRepository {
    groups: Mutex<HashMap<String, Group>>,
    policy: NamePolicy,
}

impl InMemoryGroupRepository {
    /// Names are checked with [`NamePolicy::Permissive`] unless overridden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: NamePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    /// Only the name filter applies here (case-insensitive substring). Size and order are ignored
    /// and iteration order is unspecified.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Group>, DomainError> {
        let needle = query.name_filter().map(str::to_lowercase);
        let groups = self.groups.lock();

        let found: Vec<Group> = groups
            .values()
            .filter(|g| match &needle {
                Some(n) => g.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        debug!("Returning {} of {} groups", found.len(), groups.len());
        Ok(found)
    }

    async fn create(&self, mut group: Group) -> Result<Group, DomainError> {
        group.validate_name(self.policy)?;

        let mut groups = self.groups.lock();
        group.id = new_id();
        while groups.contains_key(&group.id) {
            group.id = new_id();
        }
        groups.insert(group.id.clone(), group.clone());

        info!("Group created: {} ({})", group.id, group.name);
        Ok(group)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, DomainError> {
        Ok(self.groups.lock().get(id).cloned())
    }

    async fn update(&self, mut group: Group) -> Result<Group, DomainError> {
        group.validate_name(self.policy)?;

        let mut groups = self.groups.lock();
        match groups.get_mut(&group.id) {
            Some(stored) => {
                *stored = group.clone();
                info!("Group updated: {} ({})", group.id, group.name);
                Ok(group)
            }
            None => Err(DomainError::NotFound(group.id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        match self.groups.lock().remove(id) {
            Some(_) => {
                info!("Group deleted: {}", id);
                Ok(())
            }
            None => Err(DomainError::NotFound(id.to_string())),
        }
    }
}
