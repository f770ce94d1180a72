// ============================================================================
// Groups Core - Group Entity
// File: crates/groups-core/src/domain/group.rs
// Description: Group record and its name rules
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// Alphanumeric at both ends; space, `_`, `.` and `-` allowed in between.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9 _.\-]*[a-zA-Z0-9])?$").expect("name pattern compiles")
});

/// Generate a fresh group identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// How strictly a store checks group names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Trimmed name must be non-empty.
    #[default]
    Permissive,
    /// Trimmed name must also match the name pattern.
    Strict,
}

/// Group entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Group {
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, message = "missing name"))]
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }

    /// Trim the name in place and check it against `policy`.
    pub fn validate_name(&mut self, policy: NamePolicy) -> Result<(), DomainError> {
        self.name = self.name.trim().to_string();

        self.validate()
            .map_err(|_| DomainError::InvalidInput("missing name".to_string()))?;

        if policy == NamePolicy::Strict && !is_valid_name(&self.name) {
            return Err(DomainError::InvalidInput(format!(
                "invalid name \"{}\"",
                self.name
            )));
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_trims_and_accepts() {
        let mut group = Group::new("  -anything goes!  ");
        assert!(group.validate_name(NamePolicy::Permissive).is_ok());
        assert_eq!(group.name, "-anything goes!");
    }

    #[test]
    fn test_blank_name_rejected_by_both_policies() {
        for policy in [NamePolicy::Permissive, NamePolicy::Strict] {
            let mut group = Group::new("   ");
            let err = group.validate_name(policy).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{:?}", policy);
        }
    }

    #[test]
    fn test_strict_accepts_pattern_names() {
        for name in ["a", "ab", "Team Alpha", "v1.2-beta_3", "X 9"] {
            let mut group = Group::new(name);
            assert!(
                group.validate_name(NamePolicy::Strict).is_ok(),
                "expected {:?} to be valid",
                name
            );
        }
    }

    #[test]
    fn test_strict_rejects_separator_at_edges() {
        for name in ["-BadStart", "BadEnd.", "_x", "a b!", "ümlaut"] {
            let mut group = Group::new(name);
            let err = group.validate_name(NamePolicy::Strict).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{:?}", name);
        }
    }

    #[test]
    fn test_strict_checks_trimmed_name() {
        let mut group = Group::new("  Team Alpha \t");
        group.validate_name(NamePolicy::Strict).unwrap();
        assert_eq!(group.name, "Team Alpha");
    }

    #[test]
    fn test_deserialize_without_id() {
        let group: Group = serde_json::from_str(r#"{"name": "Ops", "extra": 1}"#).unwrap();
        assert_eq!(group.id, "");
        assert_eq!(group.name, "Ops");
    }

    #[test]
    fn test_new_id_is_unique() {
        assert_ne!(new_id(), new_id());
        assert!(!new_id().is_empty());
    }
}
