//! # Groups Core
//!
//! Domain entity, validation rules, and the repository port for the groups service.

pub mod domain;
pub mod repositories;
pub mod error;

pub use domain::*;
pub use error::DomainError;
pub use repositories::{GroupField, GroupRepository, ListQuery};
