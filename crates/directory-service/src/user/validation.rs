//! Field and image checks applied before any collaborator is called.

use validator::{Validate, ValidationError, ValidationErrors};

use directory_core::config::{MediaConfig, UsersConfig};
use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_core::traits::media::MediaUpload;
use directory_entity::user::UserFields;

/// Format rules enforced when strict validation is on.
#[derive(Debug, Validate)]
struct StrictFields {
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    last_name: String,
    #[validate(email(message = "Email is invalid"))]
    email: String,
    #[validate(custom(function = "validate_mobile"))]
    mobile: String,
}

fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile").with_message("Mobile must be 10 digits".into()))
    }
}

/// Validates user fields and profile images.
#[derive(Debug, Clone)]
pub struct UserValidator {
    strict: bool,
    media: MediaConfig,
}

impl UserValidator {
    /// Build a validator from the users and media settings.
    pub fn new(users: &UsersConfig, media: &MediaConfig) -> Self {
        Self {
            strict: users.strict_validation,
            media: media.clone(),
        }
    }

    /// Presence checks, plus format checks when strict.
    pub fn validate_fields(&self, fields: &UserFields) -> AppResult<()> {
        let required = [
            ("First name", &fields.first_name),
            ("Last name", &fields.last_name),
            ("Email", &fields.email),
            ("Mobile", &fields.mobile),
            ("Location", &fields.location),
        ];
        let missing: Vec<_> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| format!("{label} is required"))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::validation(missing.join("; ")));
        }

        if self.strict {
            StrictFields {
                first_name: fields.first_name.trim().to_string(),
                last_name: fields.last_name.trim().to_string(),
                email: fields.email.trim().to_string(),
                mobile: fields.mobile.trim().to_string(),
            }
            .validate()
            .map_err(|e| AppError::validation(describe(&e)))?;
        }
        Ok(())
    }

    /// Reject empty, oversized, or non-image uploads.
    pub fn validate_image(&self, upload: &MediaUpload) -> AppResult<()> {
        if upload.data.is_empty() {
            return Err(AppError::validation("Profile image is empty"));
        }
        if upload.data.len() as u64 > self.media.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Profile image exceeds the maximum size of {} bytes",
                self.media.max_upload_size_bytes
            )));
        }

        let content_type = upload.content_type.as_deref().unwrap_or_default();
        if !self.media.accepts_content_type(content_type) {
            return Err(AppError::validation(format!(
                "Unsupported profile image type '{content_type}'. Allowed: {}",
                self.media.allowed_content_types.join(", ")
            )));
        }
        Ok(())
    }
}

/// Flatten validator errors into one message, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
