use async_graphql::{Context, Object, Result, ID};

use crate::gql::error::GqlError;
use crate::gql::types::{
    parse_id, AddCommentPayload, Article, Comment, DestroyCommentPayload, UpdateCommentPayload,
};
use crate::state::AppState;
use infra::store::{BlogStore, NewComment, StoreError, MSG_USER_MISSING};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Attach a new comment to an article. Returns the parent article so
    /// clients can re-fetch its comment collection.
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        article_id: ID,
        user_id: ID,
        body: String,
    ) -> Result<AddCommentPayload> {
        let state = ctx.data::<AppState>()?;

        let article = match parse_id(&article_id) {
            Some(id) => state.store.article_by_id(id).await.map_err(GqlError::from)?,
            None => None,
        };
        let Some(article) = article else {
            return Ok(AddCommentPayload {
                article: None,
                errors: Some("Article not found".to_string()),
            });
        };

        // An unparseable user id can never reference an existing user, so it
        // fails the same validation an unknown id would.
        let Some(user_id) = parse_id(&user_id) else {
            return Ok(AddCommentPayload {
                article: None,
                errors: Some(MSG_USER_MISSING.to_string()),
            });
        };

        match state
            .store
            .create_comment(NewComment {
                article_id: article.id,
                user_id,
                body,
            })
            .await
        {
            Ok(_comment) => Ok(AddCommentPayload {
                article: Some(Article::from(article)),
                errors: None,
            }),
            Err(StoreError::Validation(messages)) => Ok(AddCommentPayload {
                article: None,
                errors: Some(messages.join(", ")),
            }),
            Err(e) => Err(GqlError::from(e).into()),
        }
    }

    /// Change a comment's body. `userId` and `articleId` are accepted but
    /// deliberately not applied; reassociating a comment is not supported.
    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        body: Option<String>,
        #[graphql(name = "userId")] _user_id: Option<ID>,
        #[graphql(name = "articleId")] _article_id: Option<ID>,
    ) -> Result<UpdateCommentPayload> {
        let state = ctx.data::<AppState>()?;

        let comment = match parse_id(&id) {
            Some(id) => state.store.comment_by_id(id).await.map_err(GqlError::from)?,
            None => None,
        };
        let Some(comment) = comment else {
            return Ok(UpdateCommentPayload {
                comment: None,
                errors: Some("Comment not found".to_string()),
            });
        };

        // Present-and-non-empty, spelled out: an empty string does not count
        // as a provided body.
        let body = match body {
            Some(b) if !b.is_empty() => b,
            _ => {
                return Ok(UpdateCommentPayload {
                    comment: None,
                    errors: Some("Body is required".to_string()),
                });
            }
        };

        let updated = state
            .store
            .update_comment_body(comment.id, &body)
            .await
            .map_err(GqlError::from)?;
        match updated {
            Some(row) => Ok(UpdateCommentPayload {
                comment: Some(Comment::from(row)),
                errors: None,
            }),
            // Row vanished between lookup and write.
            None => Ok(UpdateCommentPayload {
                comment: None,
                errors: Some("Comment not found".to_string()),
            }),
        }
    }

    /// Delete a comment and return its article (re-read after the delete)
    /// plus the deleted comment id.
    async fn destroy_comment(&self, ctx: &Context<'_>, id: ID) -> Result<DestroyCommentPayload> {
        let state = ctx.data::<AppState>()?;

        let comment = match parse_id(&id) {
            Some(cid) => state
                .store
                .comment_by_id(cid)
                .await
                .map_err(GqlError::from)?,
            None => None,
        };
        let Some(comment) = comment else {
            return Ok(DestroyCommentPayload {
                article: None,
                deleted_id: None,
                errors: Some("Comment not found".to_string()),
            });
        };

        state
            .store
            .delete_comment(comment.id)
            .await
            .map_err(GqlError::from)?;

        // Reload so the payload's comment collection reflects the removal.
        let article = state
            .store
            .article_by_id(comment.article_id)
            .await
            .map_err(GqlError::from)?;

        Ok(DestroyCommentPayload {
            article: article.map(Article::from),
            deleted_id: Some(id),
            errors: None,
        })
    }
}
