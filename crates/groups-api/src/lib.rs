//! # Groups API
//!
//! HTTP handlers, CORS negotiation, and the router for the groups service.

pub mod handlers;
pub mod middleware;
pub mod error;
pub mod state;
pub mod routes;

pub use error::ApiError;
pub use middleware::cors::CorsPolicy;
pub use routes::build_router;
pub use state::AppState;
