//! Media store selection from configuration.

use std::sync::Arc;

use tracing::info;

use directory_core::config::MediaConfig;
use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_core::traits::media::MediaStore;

#[cfg(feature = "cloudinary")]
use crate::providers::CloudinaryMediaStore;
use crate::providers::{LocalMediaStore, MemoryMediaStore};

/// Build the media store named by `config.provider`.
pub async fn build_media_store(config: &MediaConfig) -> AppResult<Arc<dyn MediaStore>> {
    let store: Arc<dyn MediaStore> = match config.provider.as_str() {
        "local" => Arc::new(
            LocalMediaStore::new(
                &config.local.root_path,
                &config.folder,
                &config.local.public_base_url,
            )
            .await?,
        ),
        #[cfg(feature = "cloudinary")]
        "cloudinary" => Arc::new(CloudinaryMediaStore::new(
            config.cloudinary.clone(),
            &config.folder,
        )?),
        "memory" => Arc::new(MemoryMediaStore::new()),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown media provider '{other}'"
            )));
        }
    };

    info!(provider = store.provider_type(), folder = %config.folder, "Media store ready");
    Ok(store)
}
