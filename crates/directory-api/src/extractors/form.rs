//! Create/update body extractor accepting multipart forms or JSON.

use axum::extract::{FromRequest, Multipart, Request};
use axum::{Form, Json};
use axum::http::header::CONTENT_TYPE;

use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_core::traits::media::MediaUpload;
use directory_entity::user::UserFields;

use crate::dto::request::UserForm;
use crate::error::ApiError;

/// Multipart field carrying the profile image.
pub const IMAGE_FIELD: &str = "profileImage";

/// A parsed create/update submission.
///
/// Field values stay raw until [`UserSubmission::into_parts`], so a handler
/// can check the target record before reporting body problems.
#[derive(Debug, Clone)]
pub struct UserSubmission {
    /// Every caller-supplied field, unchecked.
    pub form: UserForm,
    /// The uploaded image, if a non-empty file part was sent.
    pub image: Option<MediaUpload>,
}

impl UserSubmission {
    /// Typed fields and the optional image.
    pub fn into_parts(self) -> AppResult<(UserFields, Option<MediaUpload>)> {
        Ok((self.form.into_fields()?, self.image))
    }
}

/// Body encodings accepted for create/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Multipart,
    UrlEncoded,
    Json,
}

/// Anything that is not a form encoding is read as JSON.
fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .trim_start()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else {
        BodyKind::Json
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<(UserForm, Option<MediaUpload>), AppError> {
    let mut form = UserForm::default();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {}", e.body_text())))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == IMAGE_FIELD {
            let file_name = field.file_name().map(String::from);
            let content_type = field.content_type().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Read error: {}", e.body_text())))?;

            // Browsers send an empty part when no file was chosen.
            if data.is_empty() && file_name.as_deref().unwrap_or_default().is_empty() {
                continue;
            }
            let mut upload = MediaUpload::new(data);
            upload.file_name = file_name;
            upload.content_type = content_type;
            image = Some(upload);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::validation(format!("Read error: {}", e.body_text())))?;
            form.set(&name, value);
        }
    }

    Ok((form, image))
}

impl<S> FromRequest<S> for UserSubmission
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (form, image) = match body_kind(&req) {
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                read_multipart(multipart).await?
            }
            BodyKind::UrlEncoded => {
                let Form(form) = Form::<UserForm>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                (form, None)
            }
            BodyKind::Json => {
                let Json(form) = Json::<UserForm>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                (form, None)
            }
        };

        Ok(Self { form, image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_body_kind_from_content_type() {
        assert_eq!(
            body_kind(&request("multipart/form-data; boundary=x", "")),
            BodyKind::Multipart
        );
        assert_eq!(
            body_kind(&request("Application/X-WWW-Form-Urlencoded", "")),
            BodyKind::UrlEncoded
        );
        assert_eq!(body_kind(&request("application/json", "")), BodyKind::Json);
    }

    #[tokio::test]
    async fn test_urlencoded_submission() {
        let req = request(
            "application/x-www-form-urlencoded",
            "firstName=Ann&lastName=Lee&gender=Female&location=New+York",
        );

        let submission = UserSubmission::from_request(req, &()).await.unwrap();
        assert!(submission.image.is_none());

        let (fields, _) = submission.into_parts().unwrap();
        assert_eq!(fields.first_name, "Ann");
        assert_eq!(fields.location, "New York");
    }
}
