//! Application-wide constants

use std::time::Duration;

/// Result size used when a list request asks for zero (or no) entries.
pub const DEFAULT_LIST_SIZE: usize = 10;
/// Hard upper bound on a single list result, whatever the caller asks for.
pub const MAX_LIST_SIZE: usize = 100;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
pub const CREATE_TIMEOUT: Duration = Duration::from_secs(5);
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_PREFIX: &str = "/groups/v1";
pub const DEV_ORIGIN: &str = "http://localhost:4200";
