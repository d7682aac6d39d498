//! In-memory user store for development and tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use directory_core::error::AppError;
use directory_core::result::AppResult;
use directory_core::types::{PageRequest, SearchFilter, SortDirection, UserId};
use directory_entity::user::{User, UserDocument};

use crate::store::UserStore;

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    user: User,
}

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<Entry>,
    next_seq: u64,
}

/// A [`UserStore`] that keeps records in process memory.
///
/// Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
    fail_writes: AtomicBool,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert and update fail with a store error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::database("Memory store is rejecting writes"));
        }
        Ok(())
    }
}

fn apply_document(user: &mut User, document: &UserDocument) {
    let fields = &document.fields;
    user.first_name = fields.first_name.clone();
    user.last_name = fields.last_name.clone();
    user.email = fields.email.clone();
    user.mobile = fields.mobile.clone();
    user.gender = fields.gender;
    user.status = fields.status;
    user.location = fields.location.clone();
    user.profile_image = document.profile_image.clone();
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn store_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn insert(&self, document: &UserDocument) -> AppResult<User> {
        self.check_writable()?;

        let now = Utc::now();
        let fields = &document.fields;
        let user = User {
            id: UserId::new(),
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            mobile: fields.mobile.clone(),
            gender: fields.gender,
            status: fields.status,
            location: fields.location.clone(),
            profile_image: document.profile_image.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.push(Entry {
            seq,
            user: user.clone(),
        });
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .entries
            .iter()
            .find(|e| e.user.id == id)
            .map(|e| e.user.clone()))
    }

    async fn find_many(
        &self,
        filter: &SearchFilter,
        direction: SortDirection,
        window: Option<PageRequest>,
    ) -> AppResult<Vec<User>> {
        let inner = self.inner.read().await;
        let mut matched: Vec<&Entry> = inner
            .entries
            .iter()
            .filter(|e| filter.matches_any(&e.user.searchable_fields()))
            .collect();

        matched.sort_by(|a, b| {
            direction.apply(
                a.user
                    .created_at
                    .cmp(&b.user.created_at)
                    .then(a.seq.cmp(&b.seq)),
            )
        });

        let iter = matched.into_iter().map(|e| e.user.clone());
        let users = match window {
            Some(w) => {
                let skip = usize::try_from(w.offset()).unwrap_or(usize::MAX);
                let take = usize::try_from(w.limit()).unwrap_or(usize::MAX);
                iter.skip(skip).take(take).collect()
            }
            None => iter.collect(),
        };
        Ok(users)
    }

    async fn count(&self, filter: &SearchFilter) -> AppResult<u64> {
        let inner = self.inner.read().await;
        let total = inner
            .entries
            .iter()
            .filter(|e| filter.matches_any(&e.user.searchable_fields()))
            .count();
        Ok(total as u64)
    }

    async fn update_by_id(&self, id: UserId, document: &UserDocument) -> AppResult<Option<User>> {
        self.check_writable()?;

        let mut inner = self.inner.write().await;
        let Some(entry) = inner.entries.iter_mut().find(|e| e.user.id == id) else {
            return Ok(None);
        };

        apply_document(&mut entry.user, document);
        entry.user.updated_at = Utc::now().max(entry.user.created_at);
        Ok(Some(entry.user.clone()))
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|e| e.user.id != id);
        Ok(inner.entries.len() < before)
    }
}
