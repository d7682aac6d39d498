//! Media store configuration.

use serde::{Deserialize, Serialize};

/// Top-level media store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Media provider: `"local"`, `"cloudinary"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Folder (key prefix) profile images are stored under.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Maximum accepted image size in bytes (default 5 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Content types accepted for profile images.
    #[serde(default = "default_allowed_content_types")]
    pub allowed_content_types: Vec<String>,
    /// Local filesystem media configuration.
    #[serde(default)]
    pub local: LocalMediaConfig,
    /// Cloudinary media configuration.
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
}

impl MediaConfig {
    /// Whether `content_type` is on the allow-list (parameters ignored).
    pub fn accepts_content_type(&self, content_type: &str) -> bool {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&essence))
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            folder: default_folder(),
            max_upload_size_bytes: default_max_upload(),
            allowed_content_types: default_allowed_content_types(),
            local: LocalMediaConfig::default(),
            cloudinary: CloudinaryConfig::default(),
        }
    }
}

/// Local filesystem media configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalMediaConfig {
    /// Root path for stored images.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// Public URL prefix the API serves the root path under.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for LocalMediaConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

/// Cloudinary account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    /// Cloud name (account identifier).
    #[serde(default)]
    pub cloud_name: String,
    /// API key.
    #[serde(default)]
    pub api_key: String,
    /// API secret used to sign requests.
    #[serde(default)]
    pub api_secret: String,
    /// API base URL.
    #[serde(default = "default_cloudinary_base_url")]
    pub api_base_url: String,
    /// Eager transformation applied on upload.
    #[serde(default = "default_transformation")]
    pub transformation: String,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_base_url: default_cloudinary_base_url(),
            transformation: default_transformation(),
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_folder() -> String {
    "user-profiles".to_string()
}

fn default_max_upload() -> u64 {
    5_242_880 // 5 MB
}

fn default_allowed_content_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "image/gif".to_string(),
        "image/webp".to_string(),
    ]
}

fn default_local_root() -> String {
    "./data/media".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:5000/media".to_string()
}

fn default_cloudinary_base_url() -> String {
    "https://api.cloudinary.com/v1_1".to_string()
}

fn default_transformation() -> String {
    "c_fill,h_400,w_400".to_string()
}
