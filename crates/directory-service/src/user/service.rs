//! User queries and record lifecycle.

use std::sync::Arc;

use tracing::{debug, info};

use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_core::traits::media::{MediaStore, MediaUpload};
use directory_core::types::{PageRequest, PageResponse, SearchFilter, SortDirection, UserId};
use directory_database::UserStore;
use directory_entity::user::{User, UserDocument, UserFields};

use crate::export::render_users_csv;
use crate::outcome::{Outcome, Warnings};

use super::validation::UserValidator;

/// Lists, reads, creates, updates, deletes and exports user records.
///
/// A record never references an image that has not finished uploading:
/// uploads always complete before the record is written.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Record store.
    store: Arc<dyn UserStore>,
    /// Profile image host.
    media: Arc<dyn MediaStore>,
    /// Field and image checks.
    validator: UserValidator,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        store: Arc<dyn UserStore>,
        media: Arc<dyn MediaStore>,
        validator: UserValidator,
    ) -> Self {
        Self {
            store,
            media,
            validator,
        }
    }

    /// One page of records matching `search`, newest first, with the
    /// total number of matches.
    pub async fn list(&self, page: PageRequest, search: &str) -> AppResult<PageResponse<User>> {
        let filter = SearchFilter::new(search);
        let total = self.store.count(&filter).await?;
        let items = self
            .store
            .find_many(&filter, SortDirection::Desc, Some(page))
            .await?;

        debug!(
            page = page.page,
            limit = page.limit,
            search,
            total,
            returned = items.len(),
            "Listed users"
        );
        Ok(PageResponse::new(items, &page, total))
    }

    /// Fetch one record.
    pub async fn get(&self, id: UserId) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Create a record, uploading `image` first when present.
    pub async fn create(&self, fields: UserFields, image: Option<MediaUpload>) -> AppResult<User> {
        self.validator.validate_fields(&fields)?;
        if let Some(upload) = &image {
            self.validator.validate_image(upload)?;
        }

        let profile_image = match image {
            Some(upload) => self.media.upload(upload).await?,
            None => String::new(),
        };

        let user = self
            .store
            .insert(&UserDocument::new(fields, profile_image))
            .await?;

        info!(user_id = %user.id, has_image = user.has_profile_image(), "User created");
        Ok(user)
    }

    /// Replace every field of a record.
    ///
    /// An unknown id is reported before any field or image problem.
    ///
    /// With `image`, the previous image is deleted and the new one uploaded
    /// before the record is written. Without it, the stored image is kept.
    pub async fn update(
        &self,
        id: UserId,
        fields: UserFields,
        image: Option<MediaUpload>,
    ) -> AppResult<Outcome<User>> {
        let existing = self.get(id).await?;

        self.validator.validate_fields(&fields)?;
        if let Some(upload) = &image {
            self.validator.validate_image(upload)?;
        }

        let mut warnings = Warnings::default();

        let profile_image = match image {
            Some(upload) => {
                self.discard_image(&existing, &mut warnings).await;
                self.media.upload(upload).await?
            }
            None => existing.profile_image.clone(),
        };

        let user = self
            .store
            .update_by_id(id, &UserDocument::new(fields, profile_image))
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %id, "User updated");
        Ok(warnings.finish(user))
    }

    /// Delete a record and its image. Image cleanup failures become warnings.
    pub async fn delete(&self, id: UserId) -> AppResult<Outcome<()>> {
        let existing = self.get(id).await?;
        let mut warnings = Warnings::default();

        self.discard_image(&existing, &mut warnings).await;

        if !self.store.delete_by_id(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %id, "User deleted");
        Ok(warnings.finish(()))
    }

    /// Every record, newest first, rendered as CSV.
    pub async fn export_csv(&self) -> AppResult<String> {
        let users = self
            .store
            .find_many(&SearchFilter::all(), SortDirection::Desc, None)
            .await?;

        info!(count = users.len(), "Exporting users as CSV");
        render_users_csv(&users)
    }

    /// Names and health of the configured collaborators.
    pub async fn health(&self) -> HealthReport {
        HealthReport {
            store: self.store.store_type().to_string(),
            store_healthy: self.store.health_check().await.unwrap_or(false),
            media: self.media.provider_type().to_string(),
            media_healthy: self.media.health_check().await.unwrap_or(false),
        }
    }

    async fn discard_image(&self, user: &User, warnings: &mut Warnings) {
        if !user.has_profile_image() {
            return;
        }
        match self.media.delete(&user.profile_image).await {
            Ok(()) => debug!(user_id = %user.id, url = %user.profile_image, "Deleted profile image"),
            Err(e) => warnings.push(format!(
                "Failed to delete profile image {} for user {}: {}",
                user.profile_image, user.id, e.message
            )),
        }
    }
}

/// Collaborator health as reported by [`UserService::health`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Record store type.
    pub store: String,
    /// Whether the record store answered its health check.
    pub store_healthy: bool,
    /// Media provider type.
    pub media: String,
    /// Whether the media store answered its health check.
    pub media_healthy: bool,
}
