//! User record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use directory_core::types::UserId;

use super::gender::Gender;
use super::status::UserStatus;

/// A person stored in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-generated identifier, immutable.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email. Not unique.
    pub email: String,
    /// Contact phone number, usually 10 digits.
    pub mobile: String,
    /// Gender.
    pub gender: Gender,
    /// Account status.
    pub status: UserStatus,
    /// Free-form location.
    pub location: String,
    /// Media store URL of the profile image, or empty.
    pub profile_image: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last replaced.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether a profile image is attached.
    pub fn has_profile_image(&self) -> bool {
        !self.profile_image.is_empty()
    }

    /// The caller-supplied part of the record.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            gender: self.gender,
            status: self.status,
            location: self.location.clone(),
        }
    }

    /// Text fields searched by the list query.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.first_name, &self.last_name, &self.email, &self.mobile]
    }
}

/// Every caller-supplied field of a user record.
///
/// Create and update both take the full set: an update replaces each of
/// these values, it does not patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Gender.
    pub gender: Gender,
    /// Account status.
    #[serde(default)]
    pub status: UserStatus,
    /// Free-form location.
    pub location: String,
}

/// The full persisted payload of a record, minus store-managed columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Caller-supplied fields.
    #[serde(flatten)]
    pub fields: UserFields,
    /// Media store URL, or empty.
    pub profile_image: String,
}

impl UserDocument {
    /// Pair fields with a profile image URL (empty for none).
    pub fn new(fields: UserFields, profile_image: impl Into<String>) -> Self {
        Self {
            fields,
            profile_image: profile_image.into(),
        }
    }
}
