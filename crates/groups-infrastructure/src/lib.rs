//! # Groups Infrastructure
//!
//! Repository adapters: an in-process map and a PostgreSQL table.

pub mod database;
pub mod memory;

pub use database::{create_pool, PgGroupRepository};
pub use memory::InMemoryGroupRepository;
