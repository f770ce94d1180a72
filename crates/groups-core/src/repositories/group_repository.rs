//! Group repository trait (port)

use async_trait::async_trait;

use crate::domain::Group;
use crate::error::DomainError;
use crate::repositories::ListQuery;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Groups matching `query`. How much of the query is honoured depends on the adapter.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Group>, DomainError>;

    /// Validate and store `group` under a freshly generated id. Any caller id is discarded.
    async fn create(&self, group: Group) -> Result<Group, DomainError>;

    /// `Ok(None)` when no group has this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, DomainError>;

    /// Replace the name of the group with `group.id`.
    async fn update(&self, group: Group) -> Result<Group, DomainError>;

    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    async fn health_check(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
