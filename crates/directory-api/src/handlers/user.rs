//! User directory handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use directory_entity::user::User;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ListQuery, UserSubmission, parse_user_id};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let request = query.page_request(state.config.users.default_page_size);
    let page = state.user_service.list(request, query.search()).await?;
    Ok(Json(ApiResponse::page(page)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get(parse_user_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    submission: UserSubmission,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let (fields, image) = submission.into_parts()?;
    let user = state.user_service.create(fields, image).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user).with_message("User created successfully")),
    ))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    submission: UserSubmission,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = parse_user_id(&id)?;
    // Unknown ids are reported before body problems.
    state.user_service.get(id).await?;
    let (fields, image) = submission.into_parts()?;

    let (user, warnings) = state
        .user_service
        .update(id, fields, image)
        .await?
        .into_parts();

    Ok(Json(
        ApiResponse::ok(user)
            .with_message("User updated successfully")
            .with_warnings(warnings),
    ))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let outcome = state.user_service.delete(parse_user_id(&id)?).await?;

    Ok(Json(
        ApiResponse::message("User deleted successfully").with_warnings(outcome.warnings),
    ))
}

/// GET /api/users/export/csv
pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = state.user_service.export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=users.csv"),
        ],
        csv,
    ))
}
