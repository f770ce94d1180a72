//! # Groups Core - Domain Module

pub mod group;

pub use group::{new_id, Group, NamePolicy};
