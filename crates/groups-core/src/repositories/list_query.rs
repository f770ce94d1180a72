//! List query: allow-listed filter and sort fields plus a bounded result size.

use groups_shared::constants::{DEFAULT_LIST_SIZE, MAX_LIST_SIZE};

/// Fields a list query may filter or sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Name,
}

impl GroupField {
    /// Resolve a request key. Keys outside the allow-list yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(GroupField::Name),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            GroupField::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    filters: Vec<(GroupField, String)>,
    size: usize,
    order_by: Vec<GroupField>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter on `key`. Unknown keys and empty values are dropped; a repeated key keeps the
    /// last value.
    pub fn filter(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(field) = GroupField::from_key(key) {
            self.filters.retain(|(f, _)| *f != field);
            if !value.is_empty() {
                self.filters.push((field, value));
            }
        }
        self
    }

    /// Requested result size. Zero means "use the default".
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sort descending on `key`. Unknown keys are dropped.
    pub fn order_by(mut self, key: &str) -> Self {
        if let Some(field) = GroupField::from_key(key) {
            if !self.order_by.contains(&field) {
                self.order_by.push(field);
            }
        }
        self
    }

    pub fn filters(&self) -> &[(GroupField, String)] {
        &self.filters
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.filters
            .iter()
            .find(|(f, _)| *f == GroupField::Name)
            .map(|(_, v)| v.as_str())
    }

    pub fn sort_fields(&self) -> &[GroupField] {
        &self.order_by
    }

    /// Requested size clamped to `1..=MAX_LIST_SIZE`, with zero mapped to the default.
    pub fn effective_size(&self) -> usize {
        match self.size {
            0 => DEFAULT_LIST_SIZE,
            n => n.min(MAX_LIST_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = ListQuery::new()
            .filter("owner", "bob")
            .filter("name", "ops")
            .order_by("created_at")
            .order_by("name");

        assert_eq!(query.filters(), &[(GroupField::Name, "ops".to_string())]);
        assert_eq!(query.sort_fields(), &[GroupField::Name]);
    }

    #[test]
    fn test_empty_filter_value_clears_filter() {
        let query = ListQuery::new().filter("name", "ops").filter("name", "");
        assert_eq!(query.name_filter(), None);
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let query = ListQuery::new().filter("name", "a").filter("name", "b");
        assert_eq!(query.name_filter(), Some("b"));
        assert_eq!(query.filters().len(), 1);
    }

    #[test]
    fn test_order_by_is_deduplicated() {
        let query = ListQuery::new().order_by("name").order_by("name");
        assert_eq!(query.sort_fields().len(), 1);
    }

    #[test]
    fn test_effective_size_clamps() {
        assert_eq!(ListQuery::new().effective_size(), 10);
        assert_eq!(ListQuery::new().size(0).effective_size(), 10);
        assert_eq!(ListQuery::new().size(1).effective_size(), 1);
        assert_eq!(ListQuery::new().size(42).effective_size(), 42);
        assert_eq!(ListQuery::new().size(100).effective_size(), 100);
        assert_eq!(ListQuery::new().size(5000).effective_size(), 100);
    }
}
