//! Request logging and rate limiting middleware.

use crate::error::RosterError;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Instant};
use tracing::{debug, info, warn};

/// Process-wide limiter shared by every client.
pub type GlobalLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter handle cloned into each request.
#[derive(Clone)]
pub struct RateLimitState {
    pub global: Arc<GlobalLimiter>,
}

impl RateLimitState {
    /// Allow `requests_per_minute` requests across all clients. Zero is treated as one.
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            global: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
        }
    }

    /// Limiter that tests will not exhaust.
    pub fn permissive() -> Self {
        Self::new(10_000)
    }
}

/// Reject the request with 429 once the global quota is spent.
pub async fn rate_limit_middleware(
    State(rate_limit): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, RosterError> {
    if let Err(not_until) = rate_limit.global.check() {
        warn!(uri = %request.uri(), earliest = ?not_until, "Rate limit exceeded");
        return Err(RosterError::RateLimitExceeded);
    }

    Ok(next.run(request).await)
}

/// Log each request with its outcome. Roster mutations are logged at info.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %uri, %status, ?elapsed, "Request failed");
    } else if method == Method::POST || method == Method::DELETE {
        info!(%method, %uri, %status, ?elapsed, "Roster updated");
    } else {
        debug!(%method, %uri, %status, ?elapsed, "Request completed");
    }

    response
}
