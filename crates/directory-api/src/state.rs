//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use directory_core::config::AppConfig;
use directory_service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// User queries and record lifecycle
    pub user_service: Arc<UserService>,
}
