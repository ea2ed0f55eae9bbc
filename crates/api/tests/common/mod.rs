use std::sync::Arc;

use api::gql::{build_schema, BlogSchema};
use api::AppState;
use async_graphql::{Request, Variables};
use infra::store::MemoryStore;

// Tests call store trait methods directly when asserting on persisted state.
pub use infra::store::BlogStore;

/// Build a schema over a fresh in-memory store, returning the store too so
/// tests can seed and inspect it directly.
pub fn setup_schema() -> (BlogSchema, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::with_store(store.clone());
    (build_schema(state), store)
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &BlogSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Seed one author and one article; returns (article_id, user_id).
#[allow(dead_code)]
pub fn seed_blog(store: &MemoryStore) -> (i64, i64) {
    let user_id = store.insert_user("alice", "alice@example.com");
    let article_id = store.insert_article("Intro post", "Welcome to the blog");
    (article_id, user_id)
}
