//! The record store contract every user store implements.

use async_trait::async_trait;

use directory_core::result::AppResult;
use directory_core::types::{PageRequest, SearchFilter, SortDirection, UserId};
use directory_entity::user::{User, UserDocument};

/// Persistent collection of user records.
///
/// Records are ordered by `created_at`, with ties broken by insertion
/// order in the same direction. Every method is a single store call; no
/// method spans more than one record.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the store type name (e.g., "postgres", "memory").
    fn store_type(&self) -> &str;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Persist a new record, assigning its identifier and timestamps.
    async fn insert(&self, document: &UserDocument) -> AppResult<User>;

    /// Find a record by identifier.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Records matching `filter`, sorted by creation time in `direction`.
    ///
    /// With `window` set, only that page of the sorted match set is
    /// returned; an offset past the end yields an empty vector.
    async fn find_many(
        &self,
        filter: &SearchFilter,
        direction: SortDirection,
        window: Option<PageRequest>,
    ) -> AppResult<Vec<User>>;

    /// Number of records matching `filter`.
    async fn count(&self, filter: &SearchFilter) -> AppResult<u64>;

    /// Replace every non-generated field of a record. `None` if absent.
    async fn update_by_id(&self, id: UserId, document: &UserDocument) -> AppResult<Option<User>>;

    /// Remove a record. Returns `true` if a record was deleted.
    async fn delete_by_id(&self, id: UserId) -> AppResult<bool>;
}
