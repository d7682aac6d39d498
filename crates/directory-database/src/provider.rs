//! Record store selection from configuration.

use std::sync::Arc;

use tracing::info;

use directory_core::config::DatabaseConfig;
use directory_core::error::AppError;
use directory_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryUserStore;
use crate::migration::run_migrations;
use crate::repositories::UserRepository;
use crate::store::UserStore;

/// Build the configured user store.
///
/// For `postgres`, pending migrations are applied when `auto_migrate` is set.
pub async fn connect_user_store(config: &DatabaseConfig) -> AppResult<Arc<dyn UserStore>> {
    match config.provider.as_str() {
        "postgres" => {
            let db = DatabasePool::connect(config).await?;
            if config.auto_migrate {
                run_migrations(db.pool()).await?;
            }
            Ok(Arc::new(UserRepository::new(db.pool().clone())))
        }
        "memory" => {
            info!("Using in-memory user store");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown database provider '{other}'"
        ))),
    }
}
