//! In-memory media store for development and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use uuid::Uuid;

use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_core::traits::media::{MediaStore, MediaUpload};

const URL_PREFIX: &str = "memory://media/";

/// Keeps uploaded blobs in a map keyed by the URL handed out.
#[derive(Debug, Default)]
pub struct MemoryMediaStore {
    blobs: RwLock<HashMap<String, Bytes>>,
    fail_uploads: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryMediaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent upload fail.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent delete fail.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Whether a blob is stored under `url`.
    pub async fn contains(&self, url: &str) -> bool {
        self.blobs.read().await.contains_key(url)
    }

    /// The blob stored under `url`.
    pub async fn get(&self, url: &str) -> Option<Bytes> {
        self.blobs.read().await.get(url).cloned()
    }

    /// Number of stored blobs.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether no blobs are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn upload(&self, upload: MediaUpload) -> AppResult<String> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(AppError::media_store("Image upload failed"));
        }
        let url = format!("{URL_PREFIX}{}", Uuid::new_v4());
        self.blobs.write().await.insert(url.clone(), upload.data);
        Ok(url)
    }

    async fn delete(&self, url: &str) -> AppResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::media_store(format!("Failed to delete {url}")));
        }
        self.blobs.write().await.remove(url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_and_delete() {
        let store = MemoryMediaStore::new();
        let url = store.upload(MediaUpload::new(vec![7u8])).await.unwrap();
        assert!(url.starts_with(URL_PREFIX));
        assert_eq!(store.get(&url).await, Some(Bytes::from_static(&[7])));

        store.delete(&url).await.unwrap();
        assert!(store.is_empty().await);
        store.delete("not-a-url").await.unwrap();
    }

    #[tokio::test]
    async fn test_failure_toggles() {
        let store = MemoryMediaStore::new();
        store.set_fail_uploads(true);
        assert!(store.upload(MediaUpload::new(vec![1u8])).await.is_err());
        assert!(store.is_empty().await);

        store.set_fail_deletes(true);
        assert!(store.delete("memory://media/x").await.is_err());
    }
}
