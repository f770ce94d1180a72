//! # Groups Shared
//!
//! Constants, configuration, and telemetry shared by the groups crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
