//! Response DTOs.

use serde::{Deserialize, Serialize};

use directory_core::types::PageResponse;

/// Standard success response envelope.
///
/// Optional parts are omitted from the JSON when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Outcome message for mutations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Window metadata for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Non-fatal problems met while completing the request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            pagination: None,
            warnings: Vec::new(),
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach warnings.
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

impl ApiResponse<()> {
    /// A successful response with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            pagination: None,
            warnings: Vec::new(),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// A list response built from one page of results.
    pub fn page(page: PageResponse<T>) -> Self {
        let pagination = Pagination {
            current_page: page.page,
            total_pages: page.total_pages,
            total_users: page.total_items,
            limit: page.limit,
        };
        Self {
            success: true,
            message: None,
            data: Some(page.items),
            pagination: Some(pagination),
            warnings: Vec::new(),
        }
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page number.
    pub current_page: u64,
    /// `ceil(total_users / limit)`.
    pub total_pages: u64,
    /// Records matching the search.
    pub total_users: u64,
    /// Page size used.
    pub limit: u64,
}

/// Service liveness and collaborator health.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `"ok"` when every collaborator is healthy, `"degraded"` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Record store type.
    pub store: String,
    /// Whether the record store is reachable.
    pub store_healthy: bool,
    /// Media provider type.
    pub media: String,
    /// Whether the media store is reachable.
    pub media_healthy: bool,
}
