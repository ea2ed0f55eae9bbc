use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::error::{GqlError, ResultExt};
use crate::gql::loaders::UserLoader;
use crate::state::AppState;
use infra::models::{ArticleRow, CommentRow, UserRow};
use infra::store::BlogStore;

/// Ids travel as GraphQL `ID` strings on the wire but are BIGSERIAL values
/// underneath. Anything that does not parse behaves like an unknown id.
pub(crate) fn parse_id(id: &ID) -> Option<i64> {
    id.parse::<i64>().ok()
}

#[derive(SimpleObject)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    #[graphql(skip)]
    pub user_id: i64,
}

#[ComplexObject]
impl Comment {
    /// Author of the comment, batched across the response through the user
    /// dataloader.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        let row = loader
            .load_one(self.user_id)
            .await
            .gql_err("Failed to load comment author")?;
        Ok(row.map(User::from))
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            body: row.body,
            user_id: row.user_id,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Article {
    pub id: i64,
    pub title: String,
}

#[ComplexObject]
impl Article {
    /// Comments attached to this article, resolved per field selection so a
    /// mutation payload always reflects the store at response time.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .store
            .comments_for_article(self.id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

#[derive(SimpleObject)]
pub struct AddCommentPayload {
    pub article: Option<Article>,
    pub errors: Option<String>,
}

#[derive(SimpleObject)]
pub struct UpdateCommentPayload {
    pub comment: Option<Comment>,
    pub errors: Option<String>,
}

#[derive(SimpleObject)]
pub struct DestroyCommentPayload {
    pub article: Option<Article>,
    pub deleted_id: Option<ID>,
    pub errors: Option<String>,
}
