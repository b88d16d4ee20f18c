//! Rate limiting middleware over the shared token bucket

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::rate_limit::RateLimitDecision;

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match state.rate_limiter.acquire().await {
        RateLimitDecision::Allowed { .. } => next.run(request).await,
        RateLimitDecision::Limited { retry_after } => {
            // Round up so clients never retry before a token exists
            let seconds = retry_after.as_secs_f64().ceil().max(1.0) as u64;
            warn!(
                path = %request.uri().path(),
                retry_after_secs = seconds,
                "Rate limit exceeded"
            );

            ApiError::rate_limited("Too many requests")
                .with_retry_after(seconds)
                .into_response()
        }
    }
}
