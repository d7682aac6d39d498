//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use directory_core::error::{AppError, ErrorKind};
use directory_core::result::AppResult;
use directory_core::types::{PageRequest, SearchFilter, SortDirection, UserId};
use directory_entity::user::{User, UserDocument};

use crate::store::UserStore;

const USER_COLUMNS: &str = "id, first_name, last_name, email, mobile, gender, status, \
                            location, profile_image, created_at, updated_at";

/// `$1` is the escaped ILIKE pattern, or NULL to match every row.
const SEARCH_PREDICATE: &str = "($1::TEXT IS NULL \
                                OR first_name ILIKE $1 \
                                OR last_name ILIKE $1 \
                                OR email ILIKE $1 \
                                OR mobile ILIKE $1)";

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_sql_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl UserStore for UserRepository {
    fn store_type(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn insert(&self, document: &UserDocument) -> AppResult<User> {
        let fields = &document.fields;
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (first_name, last_name, email, mobile, gender, status, \
                                location, profile_image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.mobile)
        .bind(fields.gender)
        .bind(fields.status)
        .bind(&fields.location)
        .bind(&document.profile_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_many(
        &self,
        filter: &SearchFilter,
        direction: SortDirection,
        window: Option<PageRequest>,
    ) -> AppResult<Vec<User>> {
        let order = direction.as_sql();
        // LIMIT NULL is LIMIT ALL in PostgreSQL.
        let limit = window.map(|w| to_sql_count(w.limit()));
        let offset = window.map(|w| to_sql_count(w.offset())).unwrap_or(0);

        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {SEARCH_PREDICATE} \
             ORDER BY created_at {order}, seq {order} LIMIT $2 OFFSET $3"
        ))
        .bind(filter.like_pattern())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn count(&self, filter: &SearchFilter) -> AppResult<u64> {
        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM users WHERE {SEARCH_PREDICATE}"))
                .bind(filter.like_pattern())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count users", e)
                })?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn update_by_id(&self, id: UserId, document: &UserDocument) -> AppResult<Option<User>> {
        let fields = &document.fields;
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET first_name = $2, last_name = $3, email = $4, mobile = $5, \
                              gender = $6, status = $7, location = $8, profile_image = $9, \
                              updated_at = GREATEST(NOW(), created_at) \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.mobile)
        .bind(fields.gender)
        .bind(fields.status)
        .bind(&fields.location)
        .bind(&document.profile_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
