use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::admin;
use super::auth;
use super::health;
use super::middleware::{
    MAX_BODY_SIZE, logging_middleware, rate_limit_middleware, security_headers_middleware,
};
use super::state::AppState;
use super::v1;
use crate::config::ServerConfig;

/// Create the full router with application state
///
/// Health checks live at the root. Everything else is mounted under
/// `server.api_prefix` and passes through the rate limiter when it is enabled.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let mut api = Router::new()
        .merge(v1::create_v1_router())
        .nest("/auth", auth::create_auth_router())
        .nest("/admin", admin::create_admin_router());

    if state.rate_limiter.is_enabled() {
        api = api.route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));
    }

    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check));

    let router = match normalize_prefix(&config.api_prefix) {
        Some(prefix) => router.nest(&prefix, api),
        None => router.merge(api),
    };

    router
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// `api/v1/` becomes `/api/v1`; an empty or root prefix mounts at `/`
fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('/');

    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
