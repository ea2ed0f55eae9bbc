use async_graphql::dataloader::Loader;
use infra::models::UserRow;
use infra::store::{BlogStore, StoreError};
use std::{collections::HashMap, future::Future, sync::Arc};

/// UserLoader - batch load users by ID.
///
/// Coalesces the `user` field lookups of every comment in a response tree
/// into a single store round-trip. The loader cache lives for one request.
#[derive(Clone)]
pub struct UserLoader {
    store: Arc<dyn BlogStore>,
}

impl UserLoader {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }
}

impl Loader<i64> for UserLoader {
    type Value = UserRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[i64],
    ) -> impl Future<Output = std::result::Result<HashMap<i64, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<i64> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.users_by_ids(&ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}
