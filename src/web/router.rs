//! Router configuration.

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_data, get_user, health, hello, home, ping, redirect, run_calculation, AppState,
};
use super::middleware::security_headers;

/// Create the main router.
///
/// Every route, including `/health`, passes through request tracing and the
/// security headers middleware.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_routes = Router::new().route("/data", get(get_data));

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/user", get(get_user))
        .route("/ping", get(ping))
        .route("/hello", get(hello))
        .route("/redirect", get(redirect))
        .route("/calculate", get(run_calculation))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}
