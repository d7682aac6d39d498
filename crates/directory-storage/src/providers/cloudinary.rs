//! Cloudinary media store using the signed upload API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use directory_core::config::media::CloudinaryConfig;
use directory_core::error::{AppError, ErrorKind};
use directory_core::result::AppResult;
use directory_core::traits::media::{MediaStore, MediaUpload};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: Option<String>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Uploads profile images to a Cloudinary account.
#[derive(Debug, Clone)]
pub struct CloudinaryMediaStore {
    client: Client,
    config: CloudinaryConfig,
    folder: String,
}

impl CloudinaryMediaStore {
    /// Create a store for the given account. Credentials must be non-empty.
    pub fn new(config: CloudinaryConfig, folder: &str) -> AppResult<Self> {
        if config.cloud_name.is_empty() || config.api_key.is_empty() || config.api_secret.is_empty()
        {
            return Err(AppError::configuration(
                "Cloudinary cloud_name, api_key and api_secret must be set",
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            config,
            folder: folder.trim_matches('/').to_string(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{action}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Public id of an image this account serves at `url`.
    ///
    /// Mirrors how the URL was issued: `{folder}/{last segment without extension}`.
    fn public_id(&self, url: &str) -> Option<String> {
        let last = url.split(['?', '#']).next()?.rsplit('/').next()?;
        let stem = last.split('.').next().unwrap_or(last);
        if stem.is_empty() {
            return None;
        }
        if self.folder.is_empty() {
            Some(stem.to_string())
        } else {
            Some(format!("{}/{stem}", self.folder))
        }
    }
}

/// SHA-256 request signature over the sorted `key=value` pairs plus the secret.
fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn request_error(action: &str, e: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::MediaStore,
        format!("Cloudinary {action} request failed"),
        e,
    )
}

#[async_trait]
impl MediaStore for CloudinaryMediaStore {
    fn provider_type(&self) -> &str {
        "cloudinary"
    }

    async fn health_check(&self) -> AppResult<bool> {
        // Credentials are only checked by real calls; a configured store is healthy.
        Ok(true)
    }

    async fn upload(&self, upload: MediaUpload) -> AppResult<String> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let params = [
            ("folder", self.folder.clone()),
            ("timestamp", timestamp),
            ("transformation", self.config.transformation.clone()),
        ];
        let signature = sign(&params, &self.config.api_secret);

        let mut file = Part::bytes(upload.data.to_vec())
            .file_name(upload.file_name.clone().unwrap_or_else(|| "upload".to_string()));
        if let Some(content_type) = upload.content_type.as_deref() {
            file = file.mime_str(content_type).map_err(|e| {
                AppError::with_source(ErrorKind::Validation, "Invalid image content type", e)
            })?;
        }

        let mut form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in params {
            if !value.is_empty() {
                form = form.text(key, value);
            }
        }

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_error("upload", e))?;
        let status = response.status();
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| request_error("upload", e))?;

        match (body.secure_url, body.error) {
            (Some(url), _) if status.is_success() => {
                debug!(url = %url, "Uploaded image to Cloudinary");
                Ok(url)
            }
            (_, Some(err)) => Err(AppError::media_store(format!(
                "Cloudinary rejected upload: {}",
                err.message
            ))),
            _ => Err(AppError::media_store(format!(
                "Cloudinary upload returned {status} without a URL"
            ))),
        }
    }

    async fn delete(&self, url: &str) -> AppResult<()> {
        let Some(public_id) = self.public_id(url) else {
            debug!(url, "Ignoring URL without a public id");
            return Ok(());
        };

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let params = [("public_id", public_id.clone()), ("timestamp", timestamp)];
        let signature = sign(&params, &self.config.api_secret);

        let mut form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_error("destroy", e))?;
        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|e| request_error("destroy", e))?;

        if let Some(err) = body.error {
            return Err(AppError::media_store(format!(
                "Cloudinary rejected delete of {public_id}: {}",
                err.message
            )));
        }
        match body.result.as_deref() {
            Some("ok") => debug!(public_id = %public_id, "Deleted image from Cloudinary"),
            other => warn!(public_id = %public_id, result = ?other, "Cloudinary did not delete image"),
        }
        Ok(())
    }
}
