// ============================================================================
// Groups API - Group Handlers
// File: crates/groups-api/src/handlers/groups.rs
// ============================================================================
//! CRUD handlers for `/groups/v1`.
//!
//! Store failures are mapped per call site: reads and writes keyed by id answer 404 for any
//! failure, while list and create answer 500.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use groups_core::{DomainError, Group, ListQuery};
use groups_shared::constants::DEFAULT_LIST_SIZE;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `GET /groups/v1`. Both values stay raw so bad input degrades to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub size: Option<String>,
}

impl ListParams {
    /// Positive integer `size`, anything else falls back to the default.
    pub fn size_limit(&self) -> usize {
        self.size
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(DEFAULT_LIST_SIZE)
    }

    pub fn to_query(&self) -> ListQuery {
        ListQuery::new()
            .filter("name", self.name.clone().unwrap_or_default())
            .size(self.size_limit())
            .order_by("name")
    }
}

/// List handler - GET /groups/v1
pub async fn list_groups(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let query = params.to_query();

    let groups = state.groups.list(&query).await.map_err(|e| {
        error!(error = ?e, "Failed to list groups");
        ApiError::InternalError(format!("failed to list groups: {}", e))
    })?;

    Ok(Json(groups))
}

/// Create handler - POST /groups/v1
pub async fn create_group(
    State(state): State<AppState>,
    payload: Result<Json<Group>, JsonRejection>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let Json(group) = payload?;

    let created = state.groups.create(group).await.map_err(|e| match e {
        DomainError::InvalidInput(msg) => {
            ApiError::BadRequest(format!("failed to create: {}", msg))
        }
        other => {
            error!(error = ?other, "Failed to create group");
            ApiError::InternalError(format!("failed to create: {}", other))
        }
    })?;

    info!("Created group {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get handler - GET /groups/v1/{id}
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    match state.groups.find_by_id(&id).await {
        Ok(Some(group)) => Ok(Json(group)),
        Ok(None) => Err(ApiError::NotFound("unknown id".to_string())),
        Err(e) => {
            error!(error = ?e, "Failed to get group {}", id);
            Err(ApiError::NotFound("unknown id".to_string()))
        }
    }
}

/// Update handler - PUT /groups/v1
pub async fn update_group(
    State(state): State<AppState>,
    payload: Result<Json<Group>, JsonRejection>,
) -> Result<Json<Group>, ApiError> {
    let Json(group) = payload?;

    let updated = state.groups.update(group).await.map_err(|e| match e {
        DomainError::InvalidInput(msg) => ApiError::BadRequest(format!("update failed: {}", msg)),
        DomainError::NotFound(id) => ApiError::NotFound(format!("update failed: unknown id {}", id)),
        other => {
            error!(error = ?other, "Failed to update group");
            ApiError::NotFound(format!("update failed: {}", other))
        }
    })?;

    info!("Updated group {}", updated.id);
    Ok(Json(updated))
}

/// Delete handler - DELETE /groups/v1/{id}
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Err(e) = state.groups.delete(&id).await {
        if !matches!(e, DomainError::NotFound(_)) {
            error!(error = ?e, "Failed to delete group {}", id);
        }
        return Err(ApiError::NotFound("unknown id".to_string()));
    }

    info!("Deleted group {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groups_core::GroupField;

    fn params(name: Option<&str>, size: Option<&str>) -> ListParams {
        ListParams {
            name: name.map(str::to_string),
            size: size.map(str::to_string),
        }
    }

    #[test]
    fn test_size_defaults_for_bad_values() {
        for raw in [None, Some(""), Some("abc"), Some("0"), Some("-4"), Some("1.5")] {
            assert_eq!(params(None, raw).size_limit(), 10, "{:?}", raw);
        }
        assert_eq!(params(None, Some("7")).size_limit(), 7);
        assert_eq!(params(None, Some("500")).size_limit(), 500);
    }

    #[test]
    fn test_query_always_sorts_by_name() {
        let query = params(Some("ops"), Some("500")).to_query();
        assert_eq!(query.name_filter(), Some("ops"));
        assert_eq!(query.sort_fields(), &[GroupField::Name]);
        assert_eq!(query.effective_size(), 100);
    }

    #[test]
    fn test_missing_name_means_no_filter() {
        let query = params(None, None).to_query();
        assert!(query.filters().is_empty());
        assert_eq!(query.effective_size(), 10);
    }
}
