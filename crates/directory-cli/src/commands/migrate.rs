//! Database migration command.

use crate::output;
use directory_core::config::AppConfig;
use directory_core::error::AppError;
use directory_database::DatabasePool;
use directory_database::migration::run_migrations;

/// Apply every pending migration to the configured PostgreSQL database
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != "postgres" {
        output::print_warning(&format!(
            "Database provider '{}' has no migrations.",
            config.database.provider
        ));
        return Ok(());
    }

    let pool = DatabasePool::connect(&config.database).await?;

    println!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    pool.close().await;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
