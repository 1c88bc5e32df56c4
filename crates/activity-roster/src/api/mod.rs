//! HTTP API for the roster service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{logging_middleware, rate_limit_middleware, RateLimitState};
pub use types::*;

use crate::registry::Registry;
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Activity registry. Writers hold the lock across check and mutation.
    pub registry: Arc<RwLock<Registry>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}

/// Create the API router with the default rate limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::new(600))
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:activity_name", get(handlers::get_activity))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/unregister",
            delete(handlers::unregister),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ))
        // Health check (added after the route layer, so not rate limited)
        .route("/health", get(handlers::health))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
