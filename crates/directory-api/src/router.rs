//! Route definitions for the user directory HTTP API.
//!
//! Directory routes are mounted under `/api`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Headroom over the image limit for the form's text parts.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the Axum router with every route, the request body limit and
/// request logging.
pub fn build_router(state: AppState) -> Router {
    let media = &state.config.media;
    let body_limit = usize::try_from(media.max_upload_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(FORM_OVERHEAD_BYTES);

    let api_routes = Router::new()
        .merge(user_routes())
        .merge(health_routes());

    let mut router = Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api", api_routes);

    if media.provider == "local" {
        router = router.nest_service("/media", ServeDir::new(&media.local.root_path));
    }

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// User directory CRUD and export.
///
/// The export route is a literal path, so it takes precedence over `{id}`.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route("/users/export/csv", get(handlers::user::export_csv))
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// Liveness and collaborator health.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
