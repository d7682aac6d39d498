//! User directory server.
//!
//! Main entry point that loads configuration, sets up logging and serves
//! the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use directory_core::config::AppConfig;
use directory_core::error::AppError;

/// Directory holding `default.toml` and the environment overlays.
const CONFIG_DIR_VAR: &str = "DIRECTORY_CONFIG_DIR";
/// Selects the `{env}.toml` overlay.
const ENV_VAR: &str = "DIRECTORY_ENV";

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting user directory v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = directory_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".to_string());
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&dir, &env)
}

/// Initialize tracing; `RUST_LOG` takes precedence over the configured level
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
