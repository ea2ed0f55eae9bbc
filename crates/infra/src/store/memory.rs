use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::models::{ArticleRow, CommentRow, UserRow};
use crate::store::{
    BlogStore, NewComment, StoreError, StoreResult, MSG_BODY_BLANK, MSG_USER_MISSING,
};

/// In-memory [`BlogStore`] used by the integration tests.
///
/// Same validation rules as [`super::PgStore`]; ids are assigned
/// sequentially per table. Tracks how many batch user lookups it has served
/// so loader coalescing can be asserted on.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    user_batch_loads: AtomicUsize,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, UserRow>,
    articles: BTreeMap<i64, ArticleRow>,
    comments: BTreeMap<i64, CommentRow>,
    next_user_id: i64,
    next_article_id: i64,
    next_comment_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `users_by_ids` calls served so far.
    pub fn user_batch_loads(&self) -> usize {
        self.user_batch_loads.load(Ordering::SeqCst)
    }

    pub fn insert_user(&self, username: &str, email: &str) -> i64 {
        let mut inner = self.inner.lock();
        inner.next_user_id += 1;
        let id = inner.next_user_id;
        let now = Utc::now();
        inner.users.insert(
            id,
            UserRow {
                id,
                username: username.to_string(),
                email: email.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn insert_article(&self, title: &str, body: &str) -> i64 {
        let mut inner = self.inner.lock();
        inner.next_article_id += 1;
        let id = inner.next_article_id;
        let now = Utc::now();
        inner.articles.insert(
            id,
            ArticleRow {
                id,
                title: title.to_string(),
                body: body.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn insert_comment(&self, article_id: i64, user_id: i64, body: &str) -> i64 {
        let mut inner = self.inner.lock();
        inner.next_comment_id += 1;
        let id = inner.next_comment_id;
        let now = Utc::now();
        inner.comments.insert(
            id,
            CommentRow {
                id,
                article_id,
                user_id,
                body: body.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn article_by_id(&self, id: i64) -> StoreResult<Option<ArticleRow>> {
        Ok(self.inner.lock().articles.get(&id).cloned())
    }

    async fn comment_by_id(&self, id: i64) -> StoreResult<Option<CommentRow>> {
        Ok(self.inner.lock().comments.get(&id).cloned())
    }

    async fn users_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<UserRow>> {
        self.user_batch_loads.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.lock();
        Ok(ids
            .iter()
            .filter_map(|id| inner.users.get(id).cloned())
            .collect())
    }

    async fn comments_for_article(&self, article_id: i64) -> StoreResult<Vec<CommentRow>> {
        let inner = self.inner.lock();
        Ok(inner
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn create_comment(&self, data: NewComment) -> StoreResult<CommentRow> {
        let mut inner = self.inner.lock();

        let mut errors = Vec::new();
        if data.body.trim().is_empty() {
            errors.push(MSG_BODY_BLANK.to_string());
        }
        if !inner.users.contains_key(&data.user_id) {
            errors.push(MSG_USER_MISSING.to_string());
        }
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        inner.next_comment_id += 1;
        let id = inner.next_comment_id;
        let now = Utc::now();
        let row = CommentRow {
            id,
            article_id: data.article_id,
            user_id: data.user_id,
            body: data.body,
            created_at: now,
            updated_at: now,
        };
        inner.comments.insert(id, row.clone());
        Ok(row)
    }

    async fn update_comment_body(&self, id: i64, body: &str) -> StoreResult<Option<CommentRow>> {
        let mut inner = self.inner.lock();
        Ok(inner.comments.get_mut(&id).map(|row| {
            row.body = body.to_string();
            row.updated_at = Utc::now();
            row.clone()
        }))
    }

    async fn delete_comment(&self, id: i64) -> StoreResult<u64> {
        let removed = self.inner.lock().comments.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
