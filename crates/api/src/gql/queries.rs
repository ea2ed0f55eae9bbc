use async_graphql::{Context, Object, Result, ID};

use crate::gql::error::GqlError;
use crate::gql::types::{parse_id, Article, Comment};
use crate::state::AppState;
use infra::store::BlogStore;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Find an Article by id
    async fn article(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Article>> {
        let state = ctx.data::<AppState>()?;
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let row = state.store.article_by_id(id).await.map_err(GqlError::from)?;
        Ok(row.map(Article::from))
    }

    /// Find a Comment by id
    async fn comment(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Comment>> {
        let state = ctx.data::<AppState>()?;
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let row = state.store.comment_by_id(id).await.map_err(GqlError::from)?;
        Ok(row.map(Comment::from))
    }
}
