// ============================================================================
// Groups Infrastructure - PostgreSQL Repository Tests
// File: crates/groups-infrastructure/tests/pg_group_repository_test.rs
// ============================================================================
//! Run against a live server when `DATABASE_URL` is set; otherwise each test returns early.

use std::time::Duration;

use groups_core::domain::new_id;
use groups_core::{DomainError, Group, GroupRepository, ListQuery};
use groups_infrastructure::{create_pool, PgGroupRepository};

async fn repository() -> Option<PgGroupRepository> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = create_pool(&url, 2, Duration::from_secs(3))
        .await
        .expect("database from DATABASE_URL should be reachable");
    Some(PgGroupRepository::new(pool))
}

/// Unique name prefix so runs against a shared table do not see each other's rows.
fn prefix() -> String {
    format!("t{}", new_id().replace('-', ""))
}

#[tokio::test]
async fn test_find_unknown_id_is_none() {
    let Some(repo) = repository().await else { return };
    assert_eq!(repo.find_by_id(&new_id()).await.unwrap(), None);
}

#[tokio::test]
async fn test_create_get_delete() {
    let Some(repo) = repository().await else { return };
    let name = format!("{} Team", prefix());

    let created = repo.create(Group::new(name.clone())).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, name);
    assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created.clone()));

    repo.delete(&created.id).await.unwrap();
    assert_eq!(repo.find_by_id(&created.id).await.unwrap(), None);

    let err = repo.delete(&created.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(id) if id == created.id));
}

#[tokio::test]
async fn test_update_unknown_id_still_succeeds() {
    let Some(repo) = repository().await else { return };
    let id = new_id();

    let updated = repo
        .update(Group { id: id.clone(), name: "Nobody".to_string() })
        .await
        .unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
}

#[tokio::test]
async fn test_strict_names_rejected_before_insert() {
    let Some(repo) = repository().await else { return };
    let err = repo.create(Group::new("-BadStart")).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_list_is_bounded_and_sorted_descending() {
    let Some(repo) = repository().await else { return };
    let prefix = prefix();

    let mut ids = Vec::new();
    for i in 0..105 {
        let created = repo
            .create(Group::new(format!("{} {:03}", prefix, i)))
            .await
            .unwrap();
        ids.push(created.id);
    }

    let by_prefix = || ListQuery::new().filter("name", format!("^{}", prefix)).order_by("name");

    let default_page = repo.list(&by_prefix()).await.unwrap();
    assert_eq!(default_page.len(), 10);
    assert_eq!(default_page[0].name, format!("{} 104", prefix));
    assert_eq!(default_page[9].name, format!("{} 095", prefix));

    let capped = repo.list(&by_prefix().size(5000)).await.unwrap();
    assert_eq!(capped.len(), 100);

    let small = repo.list(&by_prefix().size(3)).await.unwrap();
    assert_eq!(small.len(), 3);

    for id in ids {
        repo.delete(&id).await.unwrap();
    }
}
