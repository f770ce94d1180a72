// ============================================================================
// Groups Infrastructure - PostgreSQL Group Repository
// File: crates/groups-infrastructure/src/database/postgres/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info};

use groups_core::domain::{new_id, Group, NamePolicy};
use groups_core::error::DomainError;
use groups_core::repositories::{GroupRepository, ListQuery};
use groups_shared::constants::{CONNECT_TIMEOUT, CREATE_TIMEOUT, OPERATION_TIMEOUT};

pub struct PgGroupRepository {
    pool: PgPool,
    policy: NamePolicy,
}

impl PgGroupRepository {
    /// Names are checked with [`NamePolicy::Strict`] unless overridden.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            policy: NamePolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: NamePolicy) -> Self {
        self.policy = policy;
        self
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct GroupRow {
    pub id: String,
    pub name: String,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            name: row.name,
        }
    }
}

/// Row count bound into `LIMIT`: the requested size, defaulted and capped.
fn list_limit(query: &ListQuery) -> i64 {
    query.effective_size() as i64
}

/// Translate a list query into SQL. Filters are case-sensitive regex matches, sorting is
/// descending only, and the limit is always bound.
fn build_list_query(query: &ListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT id, name FROM groups");

    for (i, (field, pattern)) in query.filters().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        builder.push(field.column());
        builder.push(" ~ ");
        builder.push_bind(pattern.clone());
    }

    if !query.sort_fields().is_empty() {
        builder.push(" ORDER BY ");
        let mut columns = builder.separated(", ");
        for field in query.sort_fields() {
            columns.push(format!("{} DESC", field.column()));
        }
    }

    builder.push(" LIMIT ");
    builder.push_bind(list_limit(query));
    builder
}

/// Run one store round trip under its own time budget. A timeout is reported like any other
/// failure.
async fn bounded<T, F>(limit: Duration, context: &'static str, op: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            error!("Database error ({}): {}", context, e);
            Err(DomainError::operation_failed(context, e))
        }
        Err(elapsed) => {
            error!("Database timeout ({}) after {:?}", context, limit);
            Err(DomainError::operation_failed(context, elapsed))
        }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Group>, DomainError> {
        let mut builder = build_list_query(query);
        debug!("Listing groups: {}", builder.sql());

        let rows: Vec<GroupRow> = bounded(
            OPERATION_TIMEOUT,
            "failed to find groups",
            builder.build_query_as::<GroupRow>().fetch_all(&self.pool),
        )
        .await?;

        debug!("Returning {} groups", rows.len());
        Ok(rows.into_iter().map(Group::from).collect())
    }

    async fn create(&self, mut group: Group) -> Result<Group, DomainError> {
        group.validate_name(self.policy)?;
        group.id = new_id();

        bounded(
            CREATE_TIMEOUT,
            "failed to insert group into db",
            sqlx::query("INSERT INTO groups (id, name) VALUES ($1, $2)")
                .bind(&group.id)
                .bind(&group.name)
                .execute(&self.pool),
        )
        .await?;

        info!("Group created: {} ({})", group.id, group.name);
        Ok(group)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> = bounded(
            OPERATION_TIMEOUT,
            "failed to get group",
            sqlx::query_as("SELECT id, name FROM groups WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?;

        debug!("Lookup {} -> found={}", id, row.is_some());
        Ok(row.map(|r| r.into()))
    }

    async fn update(&self, mut group: Group) -> Result<Group, DomainError> {
        group.validate_name(self.policy)?;

        // Zero affected rows is not reported: an unknown id updates nothing and still succeeds.
        bounded(
            OPERATION_TIMEOUT,
            "failed to update group",
            sqlx::query("UPDATE groups SET name = $2 WHERE id = $1")
                .bind(&group.id)
                .bind(&group.name)
                .execute(&self.pool),
        )
        .await?;

        info!("Group updated: {} ({})", group.id, group.name);
        Ok(group)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let deleted: Option<String> = bounded(
            OPERATION_TIMEOUT,
            "failed to delete group",
            sqlx::query_scalar("DELETE FROM groups WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?;

        match deleted {
            Some(_) => {
                info!("Group deleted: {}", id);
                Ok(())
            }
            None => Err(DomainError::NotFound(id.to_string())),
        }
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        bounded(
            CONNECT_TIMEOUT,
            "database unreachable",
            sqlx::query("SELECT 1").execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
