use async_trait::async_trait;

use crate::db::Db;
use crate::models::{ArticleRow, CommentRow, UserRow};
use crate::store::{
    BlogStore, NewComment, StoreError, StoreResult, MSG_BODY_BLANK, MSG_USER_MISSING,
};

/// Postgres-backed [`BlogStore`].
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }

    async fn article_by_id(&self, id: i64) -> StoreResult<Option<ArticleRow>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, created_at, updated_at FROM articles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn comment_by_id(&self, id: i64) -> StoreResult<Option<CommentRow>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, user_id, body, created_at, updated_at FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn users_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<UserRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, created_at, updated_at
            FROM users
            WHERE id = ANY($1::bigint[])
            "#,
        )
        .bind(ids)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn comments_for_article(&self, article_id: i64) -> StoreResult<Vec<CommentRow>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, article_id, user_id, body, created_at, updated_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn create_comment(&self, data: NewComment) -> StoreResult<CommentRow> {
        let mut errors = Vec::new();

        if data.body.trim().is_empty() {
            errors.push(MSG_BODY_BLANK.to_string());
        }

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(data.user_id)
                .fetch_one(&self.db)
                .await?;
        if !user_exists {
            errors.push(MSG_USER_MISSING.to_string());
        }

        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (article_id, user_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, article_id, user_id, body, created_at, updated_at
            "#,
        )
        .bind(data.article_id)
        .bind(data.user_id)
        .bind(&data.body)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn update_comment_body(&self, id: i64, body: &str) -> StoreResult<Option<CommentRow>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments
            SET body = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, article_id, user_id, body, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(body)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete_comment(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
