//! CSV rendering of user records.

use chrono::SecondsFormat;

use directory_core::error::{AppError, ErrorKind};
use directory_core::result::AppResult;
use directory_entity::user::User;

/// Header labels, in column order.
pub const CSV_HEADER: [&str; 10] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Mobile",
    "Gender",
    "Status",
    "Location",
    "Profile Image",
    "Created At",
];

fn csv_error(e: impl std::error::Error + Send + Sync + 'static) -> AppError {
    AppError::with_source(ErrorKind::Serialization, "Failed to render CSV", e)
}

/// Render `users` as CSV, one row per record in the given order.
///
/// Values containing a comma, quote, or line break are quoted with doubled
/// inner quotes. Every row, including the header, ends with `\n`.
pub fn render_users_csv(users: &[User]) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for user in users {
        let id = user.id.to_string();
        let created_at = user.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        writer
            .write_record([
                id.as_str(),
                user.first_name.as_str(),
                user.last_name.as_str(),
                user.email.as_str(),
                user.mobile.as_str(),
                user.gender.as_str(),
                user.status.as_str(),
                user.location.as_str(),
                user.profile_image.as_str(),
                created_at.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| csv_error(e.into_error()))?;
    String::from_utf8(bytes).map_err(csv_error)
}
