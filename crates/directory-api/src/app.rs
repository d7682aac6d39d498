//! Application builder: wires router, middleware and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use directory_core::config::AppConfig;
use directory_core::error::{AppError, ErrorKind};
use directory_core::traits::media::MediaStore;
use directory_database::{UserStore, connect_user_store};
use directory_service::{UserService, UserValidator};
use directory_storage::build_media_store;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Assemble handler state from configuration and connected stores.
pub fn build_state(
    config: AppConfig,
    store: Arc<dyn UserStore>,
    media: Arc<dyn MediaStore>,
) -> AppState {
    let validator = UserValidator::new(&config.users, &config.media);
    let user_service = Arc::new(UserService::new(store, media, validator));

    AppState {
        config: Arc::new(config),
        user_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let cors = build_cors_layer(&server.cors);
    let timeout = Duration::from_secs(server.request_timeout_seconds);

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the directory server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting user directory server...");

    let store = connect_user_store(&config.database).await?;
    let media = build_media_store(&config.media).await?;
    info!(
        store = store.store_type(),
        media = media.provider_type(),
        "Collaborators ready"
    );

    let addr = config.server.bind_address();
    let app = build_app(build_state(config, store, media));

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!("User directory listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
