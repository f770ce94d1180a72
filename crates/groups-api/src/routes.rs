use axum::{middleware, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use groups_shared::constants::API_PREFIX;

use crate::handlers::{self, groups, health};
use crate::middleware::cors_middleware;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let group_routes = Router::new()
        .route(
            API_PREFIX,
            get(groups::list_groups)
                .post(groups::create_group)
                .put(groups::update_group)
                .options(handlers::preflight),
        )
        .route(
            &format!("{}/{{id}}", API_PREFIX),
            get(groups::get_group)
                .delete(groups::delete_group)
                .options(handlers::preflight),
        );

    let public_routes = Router::new()
        .route("/health", get(health::health_check).options(handlers::preflight))
        .route(
            "/health/ready",
            get(health::readiness_check).options(handlers::preflight),
        );

    Router::new()
        .merge(group_routes)
        .merge(public_routes)
        .fallback(handlers::unknown)
        // CORS negotiation, also covers the fallback
        .layer(middleware::from_fn_with_state(
            state.cors.clone(),
            cors_middleware,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}
