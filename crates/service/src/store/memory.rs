use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::store;

use crate::errors::ServiceError;
use crate::store::repository::StoreRepository;

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, String>,
}

/// Process-local repository used when no database is configured.
/// Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryStoreRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn insert(&self, name: &str) -> Result<store::Model, ServiceError> {
        let mut inner = self.inner.write().await;
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Db("store id space exhausted".into()))?;
        let id = inner.next_id;
        inner.rows.insert(id, name.to_string());
        Ok(store::Model { id, name: name.to_string() })
    }

    async fn find(&self, id: i32) -> Result<Option<store::Model>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).map(|name| store::Model { id, name: name.clone() }))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }
}
