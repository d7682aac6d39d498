//! Media store trait for pluggable profile-image hosts.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A blob handed to a media store for upload.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    /// Raw image bytes.
    pub data: Bytes,
    /// MIME type reported by the client.
    pub content_type: Option<String>,
    /// Original file name reported by the client.
    pub file_name: Option<String>,
}

impl MediaUpload {
    /// Create an upload from bytes with no metadata.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
            file_name: None,
        }
    }

    /// Attach a content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Attach the client-side file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// File extension implied by the content type, falling back to the
    /// file name's extension.
    pub fn extension(&self) -> Option<String> {
        let from_type = self
            .content_type
            .as_deref()
            .and_then(|ct| match ct.split(';').next().map(str::trim) {
                Some("image/jpeg") => Some("jpg"),
                Some("image/png") => Some("png"),
                Some("image/gif") => Some("gif"),
                Some("image/webp") => Some("webp"),
                _ => None,
            })
            .map(str::to_string);

        from_type.or_else(|| {
            self.file_name
                .as_deref()
                .and_then(|name| name.rsplit_once('.'))
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        })
    }
}

/// Store-and-fetch-by-URL blob host for profile images.
///
/// Implementations exist for the local filesystem, Cloudinary, and
/// memory. The trait is defined here in `directory-core` and implemented
/// in `directory-storage`.
#[async_trait]
pub trait MediaStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "cloudinary").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store a blob and return a dereferenceable URL for it.
    ///
    /// The URL is only returned once the blob is fully stored.
    async fn upload(&self, upload: MediaUpload) -> AppResult<String>;

    /// Remove the blob behind `url`.
    ///
    /// Unknown or foreign URLs are not an error. Callers treat any error
    /// returned here as a non-fatal cleanup failure.
    async fn delete(&self, url: &str) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_prefers_content_type() {
        let upload = MediaUpload::new(vec![1u8])
            .with_content_type("image/png")
            .with_file_name("avatar.jpeg");
        assert_eq!(upload.extension().as_deref(), Some("png"));
    }

    #[test]
    fn test_extension_falls_back_to_file_name() {
        let upload = MediaUpload::new(vec![1u8]).with_file_name("Avatar.JPEG");
        assert_eq!(upload.extension().as_deref(), Some("jpeg"));
        assert_eq!(MediaUpload::new(vec![1u8]).extension(), None);
        assert_eq!(
            MediaUpload::new(vec![1u8]).with_file_name("../x/").extension(),
            None
        );
    }
}
