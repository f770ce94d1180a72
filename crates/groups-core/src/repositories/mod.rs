//! Repository traits (ports)

pub mod group_repository;
pub mod list_query;

pub use group_repository::GroupRepository;
pub use list_query::{GroupField, ListQuery};
