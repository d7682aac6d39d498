//! Local filesystem media store.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use directory_core::error::{AppError, ErrorKind};
use directory_core::result::AppResult;
use directory_core::traits::media::{MediaStore, MediaUpload};

/// Stores images as files under a root directory and hands out URLs
/// below a public base URL that the API serves the root under.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    /// Root directory for all stored images.
    root: PathBuf,
    /// Sub-directory of `root` new uploads land in.
    folder: String,
    /// URL prefix corresponding to `root`, without a trailing slash.
    public_base_url: String,
}

impl LocalMediaStore {
    /// Create a new local media store rooted at the given path.
    pub async fn new(root_path: &str, folder: &str, public_base_url: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        let folder = folder.trim_matches('/').to_string();
        fs::create_dir_all(root.join(&folder)).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::MediaStore,
                format!("Failed to create media root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            folder,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Map a URL issued by this store back to its relative path.
    ///
    /// Returns `None` for foreign URLs and anything that would escape the root.
    fn relative_path(&self, url: &str) -> Option<String> {
        let rest = url.strip_prefix(&self.public_base_url)?.strip_prefix('/')?;
        if rest.is_empty() || rest.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..")
        {
            return None;
        }
        Some(rest.to_string())
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn upload(&self, upload: MediaUpload) -> AppResult<String> {
        let name = match upload.extension() {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        let relative = if self.folder.is_empty() {
            name
        } else {
            format!("{}/{name}", self.folder)
        };

        let full_path = self.root.join(&relative);
        fs::write(&full_path, &upload.data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::MediaStore,
                format!("Failed to write image: {relative}"),
                e,
            )
        })?;

        debug!(path = %relative, bytes = upload.data.len(), "Stored image");
        Ok(format!("{}/{relative}", self.public_base_url))
    }

    async fn delete(&self, url: &str) -> AppResult<()> {
        let Some(relative) = self.relative_path(url) else {
            debug!(url, "Ignoring URL outside the local media root");
            return Ok(());
        };

        match fs::remove_file(self.root.join(&relative)).await {
            Ok(()) => {
                debug!(path = %relative, "Deleted image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::MediaStore,
                format!("Failed to delete image: {relative}"),
                e,
            )),
        }
    }
}
