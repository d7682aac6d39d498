//! Request DTOs.

use serde::{Deserialize, Serialize};

use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_entity::user::{Gender, UserFields, UserStatus};

/// User fields as submitted by a form or JSON body, before parsing.
///
/// Absent text fields become empty strings so the service reports them
/// as missing. Gender is required; status defaults to `Active`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub mobile: Option<String>,
    /// `Male`, `Female` or `Other`.
    pub gender: Option<String>,
    /// `Active` or `Inactive`.
    pub status: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
}

impl UserForm {
    /// Set a field by its wire name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "mobile" => &mut self.mobile,
            "gender" => &mut self.gender,
            "status" => &mut self.status,
            "location" => &mut self.location,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Parse into the full field set of a record.
    pub fn into_fields(self) -> AppResult<UserFields> {
        let gender = match self.gender.as_deref().map(str::trim) {
            None | Some("") => return Err(AppError::validation("Gender is required")),
            Some(raw) => raw.parse::<Gender>()?,
        };
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => UserStatus::default(),
            Some(raw) => raw.parse::<UserStatus>()?,
        };

        Ok(UserFields {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            mobile: self.mobile.unwrap_or_default(),
            gender,
            status,
            location: self.location.unwrap_or_default(),
        })
    }
}
