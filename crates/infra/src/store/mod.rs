mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ArticleRow, CommentRow, UserRow};

/// Validation message for a comment with a blank body.
pub const MSG_BODY_BLANK: &str = "Body can't be blank";
/// Validation message for a comment referencing an unknown user.
pub const MSG_USER_MISSING: &str = "User must exist";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: i64,
    pub user_id: i64,
    pub body: String,
}

/// Persistence contract consumed by the GraphQL layer.
///
/// Backed by Postgres in production ([`PgStore`]) and by an in-memory map
/// store in tests ([`MemoryStore`]). Articles and users are read-only here;
/// only comments have a write path.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> StoreResult<()>;

    async fn article_by_id(&self, id: i64) -> StoreResult<Option<ArticleRow>>;

    async fn comment_by_id(&self, id: i64) -> StoreResult<Option<CommentRow>>;

    /// Batch lookup for the user dataloader. Missing ids are simply absent
    /// from the result; order is unspecified.
    async fn users_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<UserRow>>;

    async fn comments_for_article(&self, article_id: i64) -> StoreResult<Vec<CommentRow>>;

    /// Persist a new comment. Returns `StoreError::Validation` with
    /// user-facing messages when the data violates a constraint; no row is
    /// written in that case.
    async fn create_comment(&self, data: NewComment) -> StoreResult<CommentRow>;

    /// Body-only update. Returns `None` when the comment no longer exists.
    async fn update_comment_body(&self, id: i64, body: &str) -> StoreResult<Option<CommentRow>>;

    /// Hard delete. Returns the number of rows removed (0 or 1).
    async fn delete_comment(&self, id: i64) -> StoreResult<u64>;
}
