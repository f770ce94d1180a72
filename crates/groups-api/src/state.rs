use std::sync::Arc;

use groups_core::GroupRepository;

use crate::middleware::cors::CorsPolicy;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub groups: Arc<dyn GroupRepository>,
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(groups: Arc<dyn GroupRepository>, cors: CorsPolicy) -> Self {
        Self {
            groups,
            cors: Arc::new(cors),
        }
    }
}
